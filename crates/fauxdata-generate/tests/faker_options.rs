use std::fs;
use std::sync::Arc;

use fauxdata_core::{Error, FakerOptions, LocaleData, SeededRandom};
use fauxdata_generate::{Faker, bundled_locale};

#[test]
fn seeded_options_are_reproducible() {
    let options = FakerOptions::from_toml_str("seed = 2024").expect("options");
    let mut left = Faker::from_options(&options).expect("faker");
    let mut right = Faker::from_options(&options).expect("faker");
    for _ in 0..10 {
        assert_eq!(
            left.internet().email_address().expect("email"),
            right.internet().email_address().expect("email")
        );
        assert_eq!(
            left.resolve("name.name").expect("name"),
            right.resolve("name.name").expect("name")
        );
    }
    assert_eq!(left.locale(), "en");
}

#[test]
fn locale_directory_overrides_with_bundled_fallback() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("fr.json"),
        r#"{"name": {"first_name": ["Amélie"], "last_name": ["Dupont"]}}"#,
    )
    .expect("write locale");

    let options = FakerOptions {
        locale: "fr".to_string(),
        seed: Some(1),
        locale_dir: Some(dir.path().to_path_buf()),
        ..FakerOptions::default()
    };
    let mut faker = Faker::from_options(&options).expect("faker");
    assert_eq!(faker.locale(), "fr");
    assert_eq!(faker.name().first_name().expect("first name"), "Amélie");

    let email = faker.internet().email_address().expect("email");
    assert!(email.starts_with("amélie.dupont@"), "{email}");
    assert!(!faker.lorem().word().expect("fallback word").is_empty());
}

#[test]
fn foreign_locale_without_directory_is_rejected() {
    let options = FakerOptions {
        locale: "de".to_string(),
        ..FakerOptions::default()
    };
    assert!(matches!(
        Faker::from_options(&options),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn template_depth_option_is_applied() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("en.json"),
        r##"{"loop": {"a": "#{b}", "b": "#{a}"}}"##,
    )
    .expect("write locale");

    let options = FakerOptions::from_toml_str(&format!(
        "locale_dir = {:?}\nmax_template_depth = 3\n",
        dir.path().display().to_string()
    ))
    .expect("options");
    let mut faker = Faker::from_options(&options).expect("faker");
    assert!(matches!(
        faker.resolve("loop.a"),
        Err(Error::TemplateDepthExceeded { depth: 3, .. })
    ));
}

#[test]
fn full_names_expand_every_placeholder() {
    let mut faker = Faker::with_seed(5).expect("faker");
    for _ in 0..50 {
        let name = faker.name().full_name().expect("full name");
        assert!(!name.contains("#{"), "{name}");
        assert!(name.split(' ').count() >= 2, "{name}");
    }
}

#[test]
fn shared_locale_serves_independent_fakers() {
    let locale = bundled_locale().expect("bundled locale");
    let mut first = Faker::with_random(Arc::clone(&locale), SeededRandom::derive(7, "first"));
    let mut second = Faker::with_random(locale, SeededRandom::derive(7, "first"));
    assert_eq!(
        first.lorem().sentence(3).expect("sentence"),
        second.lorem().sentence(3).expect("sentence")
    );
    assert!(first.bool().bool() == second.bool().bool());
}

#[test]
fn bothify_fills_markers() {
    let mut faker = Faker::with_seed(3).expect("faker");
    let code = faker.bothify("??-####").expect("bothify");
    assert_eq!(code.len(), 7);
    assert!(code[..2].chars().all(|c| c.is_ascii_uppercase()));
    assert!(code[3..].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn custom_locale_data_can_be_built_in_memory() {
    let data = LocaleData::new("en").with_entry("lorem.words", vec!["only"]);
    let mut faker = Faker::with_random(Arc::new(data), SeededRandom::new(1));
    assert_eq!(faker.lorem().words(3).expect("words"), vec!["only"; 3]);
}
