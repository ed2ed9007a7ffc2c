use std::cell::Cell;

use ini_config::utils::ParseBoolError;
use ini_config::{Config, Error, Item};

#[cfg(test)]
mod config_tests {
    use super::*;

    fn sample() -> Config {
        "[section]\nproperty = value\nflag = True\ncount = -42\nratio = 0.5\nword = many"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_sections() {
        assert!(Config::new().sections().is_empty());

        let config: Config = "[one]\n[two]".parse().unwrap();
        let mut sections = config.sections();
        // Sections come back in no particular order
        sections.sort_unstable();
        assert_eq!(sections, vec!["one", "two"]);
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn test_items() {
        let config: Config = "[section]\nprop = val".parse().unwrap();
        assert_eq!(config.items("section").unwrap(), vec![Item::new("prop", "val")]);

        let config: Config = "[section]".parse().unwrap();
        assert!(config.items("section").unwrap().is_empty());

        assert!(matches!(
            Config::new().items("section"),
            Err(Error::NoSection(_))
        ));
    }

    #[test]
    fn test_section_view() {
        let config = sample();
        let section = config.section("section").unwrap();
        assert_eq!(section.get("property").map(String::as_str), Some("value"));
        assert!(config.section("missing").is_none());
    }

    #[test]
    fn test_get_or() {
        let config = sample();
        assert_eq!(config.get_or("section", "property", "fallback"), "value");
        assert_eq!(config.get_or("section", "missing", "fallback"), "fallback");
        assert_eq!(config.get_or("missing", "property", "fallback"), "fallback");
    }

    #[test]
    fn test_get_transformed_skips_converter_on_missing_section() {
        let config = sample();
        let called = Cell::new(false);

        let result: Result<usize, Error> = config.get_transformed("missing", "property", |s| {
            called.set(true);
            Ok(s.len())
        });

        assert!(matches!(result, Err(Error::NoSection(s)) if s == "missing"));
        assert!(!called.get());
    }

    #[test]
    fn test_get_transformed_skips_converter_on_missing_property() {
        let config = sample();
        let called = Cell::new(false);

        let result: Result<usize, Error> = config.get_transformed("section", "missing", |s| {
            called.set(true);
            Ok(s.len())
        });

        assert!(matches!(result, Err(Error::NoProperty(p)) if p == "missing"));
        assert!(!called.get());
    }

    #[test]
    fn test_get_transformed_passes_converter_result_through() {
        let config = sample();

        let length: Result<usize, Error> =
            config.get_transformed("section", "property", |s| Ok(s.len()));
        assert_eq!(length.unwrap(), 5);

        let failed: anyhow::Result<()> =
            config.get_transformed("section", "property", |s| Err(anyhow::anyhow!("rejected {s}")));
        assert_eq!(failed.unwrap_err().to_string(), "rejected value");
    }

    #[test]
    fn test_get_transformed_comma_separated_list() {
        let config: Config = "[section]\nfruits = apples, bananas, pears".parse().unwrap();
        let fruits: Vec<String> = config
            .get_transformed("section", "fruits", |s| {
                Ok::<_, Error>(s.split(',').map(|v| v.trim().to_string()).collect())
            })
            .unwrap();
        assert_eq!(fruits, vec!["apples", "bananas", "pears"]);
    }

    #[test]
    fn test_get_bool() {
        let config = sample();
        assert!(config.get_bool("section", "flag").unwrap());

        let err = config.get_bool("section", "word").unwrap_err();
        match err {
            Error::Convert { property, source } => {
                assert_eq!(property, "word");
                assert_eq!(
                    source.downcast_ref::<ParseBoolError>(),
                    Some(&ParseBoolError("many".to_string()))
                );
            }
            other => panic!("expected a conversion error, got {other:?}"),
        }

        assert!(matches!(
            config.get_bool("missing", "flag"),
            Err(Error::NoSection(_))
        ));
    }

    #[test]
    fn test_get_numbers() {
        let config = sample();
        assert_eq!(config.get_int("section", "count").unwrap(), -42);
        assert_eq!(config.get_f32("section", "ratio").unwrap(), 0.5f32);
        assert_eq!(config.get_f64("section", "ratio").unwrap(), 0.5f64);

        assert!(matches!(
            config.get_int("section", "ratio"),
            Err(Error::Convert { .. })
        ));
        assert!(matches!(
            config.get_f64("section", "word"),
            Err(Error::Convert { .. })
        ));
        assert!(matches!(
            config.get_f32("section", "missing"),
            Err(Error::NoProperty(_))
        ));
    }

    #[test]
    fn test_add_section_twice() {
        let mut config = sample();
        let before = config.clone();

        let err = config.add_section("section").unwrap_err();
        assert!(matches!(err, Error::DuplicateSection(s) if s == "section"));
        assert_eq!(config, before);

        config.add_section("other").unwrap();
        assert!(config.has_section("other"));
        assert!(config.items("other").unwrap().is_empty());
    }

    #[test]
    fn test_remove_section() {
        let mut config = sample();
        config.remove_section("section").unwrap();
        assert!(!config.has_section("section"));
        assert!(!config.has_property("section", "property"));

        assert!(matches!(
            config.remove_section("section"),
            Err(Error::NoSection(_))
        ));
    }

    #[test]
    fn test_remove_property() {
        let mut config = sample();
        config.remove_property("section", "property").unwrap();
        assert!(!config.has_property("section", "property"));
        assert!(config.has_property("section", "flag"));

        assert!(matches!(
            config.remove_property("section", "property"),
            Err(Error::NoProperty(_))
        ));
        assert!(matches!(
            config.remove_property("missing", "property"),
            Err(Error::NoSection(_))
        ));
    }

    #[test]
    fn test_set() {
        let mut config = sample();
        config.set("section", "property", "changed").unwrap();
        config.set("section", "new", "added").unwrap();
        assert_eq!(config.get("section", "property").unwrap(), "changed");
        assert_eq!(config.get("section", "new").unwrap(), "added");

        let before = config.clone();
        assert!(matches!(
            config.set("missing", "property", "value"),
            Err(Error::NoSection(_))
        ));
        assert_eq!(config, before);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::NoProperty("port".to_string()).to_string(),
            "No such property \"port\""
        );
        assert_eq!(
            Error::AssignmentOutsideSection.to_string(),
            "attempted to use an assignment before a section definition"
        );
    }

    #[test]
    fn test_serde_shape() {
        let config: Config = "[server]\nport = 8080".parse().unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json, serde_json::json!({ "server": { "port": "8080" } }));

        let back: Config = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
