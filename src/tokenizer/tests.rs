use super::*;

#[test]
fn test_heuristic_empty_is_zero() {
    assert_eq!(HeuristicCounter.count(""), 0);
}

#[test]
fn test_heuristic_rounds_up() {
    assert_eq!(HeuristicCounter.count("test"), 1);
    assert_eq!(HeuristicCounter.count("test test"), 3);
    assert_eq!(HeuristicCounter.count(&"x".repeat(8000)), 2000);
}

#[test]
fn test_heuristic_counts_chars_not_bytes() {
    // 4 chars, 12 bytes
    assert_eq!(HeuristicCounter.count("世界世界"), 1);
}

#[test]
fn test_encoding_round_trips_through_name() {
    for enc in Encoding::ALL {
        assert_eq!(enc.to_string().parse::<Encoding>().unwrap(), enc);
    }
}

#[test]
fn test_encoding_parse_is_case_insensitive() {
    assert_eq!(
        " CL100K_BASE ".parse::<Encoding>().unwrap(),
        Encoding::Cl100kBase
    );
}

#[test]
fn test_unknown_encoding() {
    let err = "gpt2_bytes".parse::<Encoding>().unwrap_err();
    assert!(matches!(err, TokenizerError::UnknownEncoding(ref name) if name == "gpt2_bytes"));
}

#[test]
fn test_default_encoding_is_cl100k() {
    assert_eq!(Encoding::default(), Encoding::Cl100kBase);
}

#[test]
fn test_tiktoken_counts() {
    let counter = TiktokenCounter::new(Encoding::Cl100kBase).unwrap();
    assert_eq!(counter.count(""), 0);
    assert_eq!(counter.count("hello world"), 2);
    assert_eq!(counter.name(), "cl100k_base");
}

#[test]
fn test_tiktoken_special_tokens_do_not_fail() {
    let counter = TiktokenCounter::new(Encoding::Cl100kBase).unwrap();
    // Would be a single special token if special handling were enabled
    assert!(counter.count("<|endoftext|>") > 1);
}

#[test]
fn test_boxed_counter_delegates() {
    let boxed: Box<dyn TokenCounter> = Box::new(HeuristicCounter);
    assert_eq!(boxed.count("abcdefgh"), 2);
    assert_eq!(boxed.name(), "heuristic");
}
