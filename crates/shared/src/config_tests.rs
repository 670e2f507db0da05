use super::*;

const RATES_TOML: &str = r#"
[rates]
base_currency = "USD"

[[rates.factors]]
currency = "EUR"
factor = "0.8"

[[rates.factors]]
currency = "BTC"
factor = "0.0001"
"#;

#[test]
fn test_from_toml() {
    let config = AppConfig::from_toml(RATES_TOML).unwrap();
    assert_eq!(config.rates.base_currency, "USD");
    assert_eq!(config.rates.factors.len(), 2);
    assert_eq!(config.rates.factors[0].currency, "EUR");
    assert_eq!(config.rates.factors[0].factor, "0.8");
    assert_eq!(config.rates.factors[1].currency, "BTC");
    assert_eq!(config.rates.cross_rate, CrossRateMode::ViaBase);
}

#[test]
fn test_from_toml_cross_rate_mode() {
    let source = r#"
[rates]
base_currency = "EUR"
cross_rate = "factor_product"
"#;
    let config = AppConfig::from_toml(source).unwrap();
    assert_eq!(config.rates.cross_rate, CrossRateMode::FactorProduct);
    assert!(config.rates.factors.is_empty());
}

#[test]
fn test_from_toml_missing_base() {
    let source = r#"
[[rates.factors]]
currency = "EUR"
factor = "0.8"
"#;
    assert!(matches!(
        AppConfig::from_toml(source),
        Err(ConfigError::Load(_))
    ));
}

#[test]
fn test_base_code() {
    let config = AppConfig::from_toml(RATES_TOML).unwrap();
    assert_eq!(config.rates.base_code().unwrap().as_str(), "USD");

    let empty = RatesConfig {
        base_currency: String::new(),
        factors: vec![],
        cross_rate: CrossRateMode::default(),
    };
    assert!(matches!(
        empty.base_code(),
        Err(ConfigError::InvalidCurrency(_))
    ));
}

#[test]
fn test_load_from_environment() {
    temp_env::with_vars(
        [
            ("RUN_MODE", Some("fxmoney-test")),
            ("FXMONEY__RATES__BASE_CURRENCY", Some("GBP")),
        ],
        || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.rates.base_currency, "GBP");
            assert!(config.rates.factors.is_empty());
        },
    );
}

#[test]
fn test_cross_rate_mode_serde() {
    let mode: CrossRateMode = serde_json::from_str("\"via_base\"").unwrap();
    assert_eq!(mode, CrossRateMode::ViaBase);
    assert_eq!(
        serde_json::to_string(&CrossRateMode::FactorProduct).unwrap(),
        "\"factor_product\""
    );
}
