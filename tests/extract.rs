use iptwp_plot::{extract, pdml, Extraction, ViewerError};

/// Build a minimal PDML export with one `iptwp` proto per packet.
/// Each packet is (timestamp showname, sample shownames).
fn pdml_fixture(packets: &[(&str, &[&str])]) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?>\n<pdml>\n");
    for (timestamp, signals) in packets {
        out.push_str("<packet><proto name=\"iptwp\"><proto name=\"iptwp.pd\">\n");
        out.push_str(&format!(
            "<field name=\"iptwp.pd.timestamp_in_microsecond\" showname=\"{timestamp}\"/>\n"
        ));
        out.push_str(
            "<field name=\"iptwp.pd.ProcessVariableName\" showname=\"Process variables\">\n",
        );
        for signal in *signals {
            out.push_str(&format!("<field showname=\"{signal}\"/>\n"));
        }
        out.push_str("</field>\n</proto></proto></packet>\n");
    }
    out.push_str("</pdml>\n");
    out
}

fn extract_str(xml: &str) -> Result<Extraction, ViewerError> {
    let doc = pdml::parse(xml)?;
    extract::extract(&doc)
}

#[test]
fn pump_scenario_timestamps_and_values() {
    let xml = pdml_fixture(&[
        ("Timestamp in microseconds: 1000", &["Pump1 status [TRUE]"]),
        ("Timestamp in microseconds: 1500", &["Pump1 status [FALSE]"]),
        ("Timestamp in microseconds: 2200", &["Pump1 status [TRUE]"]),
    ]);
    let extraction = extract_str(&xml).unwrap();

    assert_eq!(extraction.timestamps(), &[0, 500, 1200]);
    let series = extraction.series("Pump1").unwrap();
    assert_eq!(series.values(), vec![1, 0, 1]);
}

#[test]
fn signal_name_is_first_whitespace_token() {
    let xml = pdml_fixture(&[("t: 10", &["Pump1 status flags [TRUE]"])]);
    let extraction = extract_str(&xml).unwrap();
    let names: Vec<&str> = extraction.names().collect();
    assert_eq!(names, vec!["Pump1"]);
}

#[test]
fn numeric_value_parses_as_integer() {
    let xml = pdml_fixture(&[("t: 10", &["Temp [42]"])]);
    let extraction = extract_str(&xml).unwrap();
    assert_eq!(extraction.series("Temp").unwrap().values(), vec![42]);
}

#[test]
fn boolean_tokens_coerce_anywhere_in_the_brackets() {
    let xml = pdml_fixture(&[(
        "t: 10",
        &["A [state: TRUE (1)]", "B [now FALSE]", "C [-7]"],
    )]);
    let extraction = extract_str(&xml).unwrap();
    assert_eq!(extraction.series("A").unwrap().values(), vec![1]);
    assert_eq!(extraction.series("B").unwrap().values(), vec![0]);
    assert_eq!(extraction.series("C").unwrap().values(), vec![-7]);
}

#[test]
fn first_packet_timestamp_normalizes_to_zero() {
    let xml = pdml_fixture(&[("t: 987654", &[]), ("t: 987754", &[])]);
    let extraction = extract_str(&xml).unwrap();
    assert_eq!(extraction.timestamps(), &[0, 100]);
}

#[test]
fn offset_is_fixed_by_packet_zero_even_if_not_minimal() {
    let xml = pdml_fixture(&[("t: 5000", &[]), ("t: 4000", &[]), ("t: 6000", &[])]);
    let extraction = extract_str(&xml).unwrap();
    assert_eq!(extraction.timestamps(), &[0, -1000, 1000]);
}

#[test]
fn names_keep_first_encounter_order_across_packets() {
    let xml = pdml_fixture(&[
        ("t: 1", &["Zeta [1]", "Alpha [2]"]),
        ("t: 2", &["Mid [3]", "Zeta [4]"]),
        ("t: 3", &["Alpha [5]"]),
    ]);
    let extraction = extract_str(&xml).unwrap();
    let names: Vec<&str> = extraction.names().collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn sparse_series_records_the_packet_it_occurred_in() {
    let xml = pdml_fixture(&[
        ("t: 100", &["Sparse [1]", "Dense [10]"]),
        ("t: 200", &["Dense [11]"]),
        ("t: 300", &["Sparse [2]", "Dense [12]"]),
    ]);
    let extraction = extract_str(&xml).unwrap();

    let sparse = extraction.series("Sparse").unwrap();
    assert_eq!(sparse.len(), 2);
    assert!(sparse.len() <= extraction.packet_count());
    let packets: Vec<usize> = sparse.samples.iter().map(|s| s.packet).collect();
    assert_eq!(packets, vec![0, 2]);

    let dense = extraction.series("Dense").unwrap();
    assert_eq!(dense.len(), extraction.packet_count());
}

#[test]
fn extraction_is_deterministic() {
    let xml = pdml_fixture(&[
        ("t: 1000", &["A [TRUE]", "B [5]"]),
        ("t: 2000", &["B [6]"]),
    ]);
    let first = extract_str(&xml).unwrap();
    let second = extract_str(&xml).unwrap();
    assert_eq!(first, second);
}

#[test]
fn document_without_matching_protos_yields_empty_extraction() {
    let xml = "<pdml><packet><proto name=\"ip\"/></packet></pdml>";
    let extraction = extract_str(xml).unwrap();
    assert_eq!(extraction.packet_count(), 0);
    assert_eq!(extraction.signal_count(), 0);
}

#[test]
fn missing_timestamp_field_is_a_parse_error() {
    let xml = "<pdml><packet><proto name=\"iptwp\"><proto name=\"iptwp.pd\">\
               <field name=\"other\" showname=\"x\"/>\
               </proto></proto></packet></pdml>";
    let err = extract_str(xml).unwrap_err();
    assert!(matches!(err, ViewerError::Parse(_)), "got {err:?}");
}

#[test]
fn missing_nested_proto_is_a_parse_error() {
    let xml = "<pdml><packet><proto name=\"iptwp\"/></packet></pdml>";
    let err = extract_str(xml).unwrap_err();
    assert!(matches!(err, ViewerError::Parse(_)), "got {err:?}");
}

#[test]
fn timestamp_without_digits_is_a_parse_error() {
    let xml = pdml_fixture(&[("no digits here", &[])]);
    let err = extract_str(&xml).unwrap_err();
    assert!(matches!(err, ViewerError::Parse(_)), "got {err:?}");
}

#[test]
fn signal_without_brackets_is_a_parse_error() {
    let xml = pdml_fixture(&[("t: 10", &["Broken value"])]);
    let err = extract_str(&xml).unwrap_err();
    assert!(matches!(err, ViewerError::Parse(_)), "got {err:?}");
}

#[test]
fn non_numeric_non_boolean_value_is_a_value_error() {
    let xml = pdml_fixture(&[("t: 10", &["Valve [open]"])]);
    let err = extract_str(&xml).unwrap_err();
    assert!(matches!(err, ViewerError::Value(_)), "got {err:?}");
}

#[test]
fn failing_packet_aborts_the_whole_extraction() {
    // Packet 0 is fine, packet 1 is broken: no partial result survives.
    let xml = pdml_fixture(&[("t: 10", &["Good [1]"]), ("t: 20", &["Bad [oops]"])]);
    assert!(extract_str(&xml).is_err());
}

#[test]
fn malformed_markup_is_a_parse_error() {
    let err = extract_str("<pdml><packet>").unwrap_err();
    assert!(matches!(err, ViewerError::Parse(_)), "got {err:?}");
}

#[test]
fn unreadable_path_is_an_io_error() {
    let err = pdml::read_export(std::path::Path::new("/nonexistent/capture.pdml")).unwrap_err();
    assert!(matches!(err, ViewerError::Io(_)), "got {err:?}");
}
