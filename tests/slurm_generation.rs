//! End-to-end generation of SLURM documents from inline bogon lists and delegated stats.
use rpki_as0_bogons::models::PrefixAssertion;
use rpki_as0_bogons::{generate_slurm, BogonSource, SlurmError};
use serde_json::json;

const DELEGATED_HEADER: &str = "2|nro|20200214|574416|19821213|20200214|+0000
nro|*|asn|*|91534|summary
nro|*|ipv4|*|214428|summary
nro|*|ipv6|*|268454|summary
";

fn delegated(records: &str) -> BogonSource {
    BogonSource::DelegatedStats(format!("{}{}", DELEGATED_HEADER, records))
}

fn prefixes(assertions: &[PrefixAssertion]) -> Vec<String> {
    assertions.iter().map(|a| a.prefix.to_string()).collect()
}

#[test]
fn delegated_stats_two_addresses() {
    let document =
        generate_slurm(&delegated("rir|US|ipv4|192.0.2.0|2|20200101|available|e|id\n")).unwrap();
    assert_eq!(
        serde_json::to_value(document.prefix_assertions()).unwrap(),
        json!([{"asn": 0, "prefix": "192.0.2.0/31", "maxPrefixLength": 32}])
    );
}

#[test]
fn delegated_stats_three_addresses() {
    let document =
        generate_slurm(&delegated("rir|US|ipv4|192.0.2.0|3|20200101|available|e|id\n")).unwrap();
    assert_eq!(
        prefixes(document.prefix_assertions()),
        vec!["192.0.2.0/31", "192.0.2.2/32"]
    );
}

#[test]
fn delegated_stats_status_filter() {
    let document = generate_slurm(&delegated(
        "rir|US|ipv4|198.51.100.0|256|20200101|assigned|e|id
rir|US|ipv4|198.51.101.0|256|20200101|allocated|e|id
rir|US|ipv4|203.0.113.0|256|20200101|reserved|e|id
rir|US|ipv6|2001:db8::|32|20200101|assigned|e|id
rir|US|ipv6|3fff::|20|20200101|ietf|e|id
rir|US|asn|64496|16|20200101|reserved|e|id
",
    ))
    .unwrap();
    assert_eq!(
        prefixes(document.prefix_assertions()),
        vec!["203.0.113.0/24", "3fff::/20"]
    );
}

#[test]
fn delegated_stats_header_only() {
    let document = generate_slurm(&BogonSource::DelegatedStats(
        DELEGATED_HEADER.to_string(),
    ))
    .unwrap();
    assert!(document.prefix_assertions().is_empty());
}

#[test]
fn delegated_stats_malformed_record() {
    let result = generate_slurm(&delegated(
        "rir|US|ipv4|203.0.113.0|256|20200101|reserved|e|id
rir|US|ipv4|192.0.2.0|2|20200101|available|e
",
    ));
    assert!(matches!(result, Err(SlurmError::Format { line: 6, .. })));
}

#[test]
fn full_bogons_document() {
    let source = BogonSource::FullBogons {
        ipv4: "0.0.0.0/8\n10.0.0.0/8\n".to_string(),
        ipv6: "::/8\n".to_string(),
    };
    let document = generate_slurm(&source).unwrap();
    assert_eq!(
        serde_json::to_value(&document).unwrap(),
        json!({
            "slurmVersion": 1,
            "validationOutputFilters": {"prefixFilters": [], "bgpsecFilter": []},
            "locallyAddedAssertions": {
                "prefixAssertions": [
                    {"asn": 0, "prefix": "0.0.0.0/8", "maxPrefixLength": 32},
                    {"asn": 0, "prefix": "10.0.0.0/8", "maxPrefixLength": 32},
                    {"asn": 0, "prefix": "::/8", "maxPrefixLength": 128}
                ],
                "bgpsecAssertions": []
            }
        })
    );
}

#[test]
fn pretty_output_round_trips() {
    let source = BogonSource::FullBogons {
        ipv4: "100.64.0.0/10".to_string(),
        ipv6: String::new(),
    };
    let document = generate_slurm(&source).unwrap();
    let pretty = document.to_json_pretty().unwrap();
    assert!(pretty.contains("\n  \"locallyAddedAssertions\": {"));
    assert_eq!(
        serde_json::from_str::<rpki_as0_bogons::SlurmDocument>(&pretty).unwrap(),
        document
    );
}
