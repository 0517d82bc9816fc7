use super::*;
use crate::market_data::{DirectoryEntry, Quote};
use rust_decimal_macros::dec;

#[test]
fn test_volume_count_display_groups_thousands() {
    assert_eq!(Volume::Count(0).to_string(), "0");
    assert_eq!(Volume::Count(999).to_string(), "999");
    assert_eq!(Volume::Count(1_000).to_string(), "1,000");
    assert_eq!(Volume::Count(45_200_000).to_string(), "45,200,000");
}

#[test]
fn test_volume_label_is_passed_through() {
    assert_eq!(Volume::Display("45.2M".to_string()).to_string(), "45.2M");
}

#[test]
fn test_volume_untagged_serde() {
    let count: Volume = serde_json::from_str("1200").unwrap();
    assert_eq!(count, Volume::Count(1200));

    let label: Volume = serde_json::from_str("\"8.2M\"").unwrap();
    assert_eq!(label, Volume::Display("8.2M".to_string()));
}

#[test]
fn test_normalize_symbol() {
    assert_eq!(normalize_symbol("  aapl "), "AAPL");
    assert_eq!(normalize_symbol("brk.b"), "BRK.B");
}

#[test]
fn test_placeholder_from_directory_entry() {
    let entry = DirectoryEntry::us_equity("dis", "The Walt Disney Company");
    let instrument = Instrument::placeholder(&entry, "Technology");

    assert_eq!(instrument.symbol, "DIS");
    assert_eq!(instrument.name, "The Walt Disney Company");
    assert_eq!(instrument.sector, "Technology");
    assert_eq!(instrument.price, dec!(0));
    assert_eq!(instrument.change, dec!(0));
    assert_eq!(instrument.change_percent, dec!(0));
    assert_eq!(instrument.volume, Volume::Count(0));
    assert_eq!(instrument.quote_status, QuoteStatus::Placeholder);
    assert!(instrument.updated_at.is_none());
}

#[test]
fn test_placeholder_name_fallback() {
    let entry = DirectoryEntry::us_equity("XYZ", "   ");
    let instrument = Instrument::placeholder(&entry, "Technology");
    assert_eq!(instrument.name, "XYZ Corp.");
}

#[test]
fn test_from_quote_rounds_to_display_precision() {
    let quote = Quote::new("aapl", dec!(175.8412), dec!(2.3149), dec!(1.3333), "ALPHA_VANTAGE")
        .with_volume(45_200_000);
    let instrument = Instrument::from_quote(&quote, "Apple Inc.", "Technology");

    assert_eq!(instrument.symbol, "AAPL");
    assert_eq!(instrument.price, dec!(175.84));
    assert_eq!(instrument.change, dec!(2.31));
    assert_eq!(instrument.change_percent, dec!(1.33));
    assert_eq!(instrument.volume, Volume::Count(45_200_000));
    assert_eq!(instrument.quote_status, QuoteStatus::Live);
    assert!(instrument.updated_at.is_some());
}

#[test]
fn test_gainer_and_loser() {
    let up = Instrument::new("A", "A", "Tech").with_quote(dec!(1), dec!(1), dec!(0.5));
    let down = Instrument::new("B", "B", "Tech").with_quote(dec!(1), dec!(-1), dec!(-0.5));
    let flat = Instrument::new("C", "C", "Tech");

    assert!(up.is_gainer() && !up.is_loser());
    assert!(down.is_loser() && !down.is_gainer());
    assert!(!flat.is_gainer() && !flat.is_loser());
}

#[test]
fn test_validate() {
    let ok = Instrument::new("AAPL", "Apple Inc.", "Technology");
    assert!(ok.validate().is_ok());

    let no_symbol = Instrument::new("  ", "Nameless", "Technology");
    assert!(no_symbol.validate().is_err());

    let negative = ok.clone().with_quote(dec!(-1), dec!(0), dec!(0));
    assert!(negative.validate().is_err());
}

#[test]
fn test_instrument_serializes_camel_case() {
    let instrument = Instrument::new("NFLX", "Netflix Inc.", "Communication Services")
        .with_quote(dec!(421.32), dec!(-3.87), dec!(-0.91))
        .with_volume(Volume::Display("8.2M".to_string()))
        .with_status(QuoteStatus::Sample);
    let json = serde_json::to_value(&instrument).unwrap();

    assert_eq!(json["symbol"], "NFLX");
    assert_eq!(json["volume"], "8.2M");
    assert_eq!(json["quoteStatus"], "SAMPLE");
    assert!(json.get("changePercent").is_some());
    assert!(json.get("updatedAt").is_none());
}

#[test]
fn test_merge_candidate_symbol_is_normalized() {
    let from_entry: MergeCandidate = DirectoryEntry::us_equity(" ko ", "Coca-Cola").into();
    assert_eq!(from_entry.symbol(), "KO");

    let from_instrument: MergeCandidate = Instrument::new("msft", "Microsoft", "Technology").into();
    assert_eq!(from_instrument.symbol(), "MSFT");
}
