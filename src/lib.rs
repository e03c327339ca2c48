/*!
rpki-as0-bogons generates [SLURM](https://www.rfc-editor.org/rfc/rfc8416) files asserting that
bogon address space is originated by AS0, so that RPKI relying-party software marks any route
for it as invalid.

Bogons are taken from one of two sources:

- the Team Cymru full bogon lists for IPv4 and IPv6, one prefix per line;
- the NRO delegated-extended statistics, from which all `available`, `ianapool`, `ietf` and
  `reserved` address blocks are taken.

# Example

```rust
use rpki_as0_bogons::{generate_slurm, BogonSource};

let source = BogonSource::FullBogons {
    ipv4: "0.0.0.0/8\n10.0.0.0/8".to_string(),
    ipv6: "::/8".to_string(),
};
let document = generate_slurm(&source).unwrap();
assert_eq!(document.prefix_assertions().len(), 3);

let json = document.to_json_pretty().unwrap();
assert!(json.contains("\"maxPrefixLength\": 128"));
```

With the `remote` feature (enabled by default), [io::fetch_source] retrieves the raw text of
either source from its default location, or from any local file or URL.
*/

pub mod encoder;
pub mod error;
#[cfg(feature = "remote")]
pub mod io;
pub mod models;
pub mod parser;
pub mod source;

pub use encoder::{assemble_document, build_assertions, SlurmEncoder};
pub use error::SlurmError;
pub use models::{PrefixAssertion, SlurmDocument};
pub use source::{generate_slurm, BogonSource};
