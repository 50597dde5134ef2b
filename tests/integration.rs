// SPDX-License-Identifier: MPL-2.0
use pet_roster::config::{self, Config};
use pet_roster::domain::{filter, DetailPanelRule, FilterTag};
use pet_roster::i18n::fluent::I18n;
use pet_roster::infrastructure::http::decode::decode_animals;
use tempfile::tempdir;

const TWO_RECORDS: &str = r#"[
    {"id": 1, "name": "Rex", "image_url": null, "description": "Männlich", "species_id": 1},
    {"id": 2, "name": "Mia", "image_url": "", "description": "Weiblich", "species_id": 2}
]"#;

fn ids(animals: &[&pet_roster::domain::Animal]) -> Vec<i64> {
    animals.iter().map(|a| a.id.value()).collect()
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("filter-show-all"), "show all");

    let mut german_config = Config::default();
    german_config.general.language = Some("de".to_string());
    config::save_to_path(&german_config, &temp_config_file_path)
        .expect("Failed to write german config file");

    let loaded_german_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load german config from path");
    let i18n_de = I18n::new(None, &loaded_german_config);
    assert_eq!(i18n_de.current_locale().to_string(), "de");
    assert_eq!(i18n_de.tr("filter-show-all"), "alle zeigen");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn dog_cat_and_empty_tag_scenario() {
    let fetched = decode_animals(TWO_RECORDS.as_bytes()).expect("valid array");
    assert_eq!(fetched.skipped, 0);

    let dog: FilterTag = "dog".parse().unwrap();
    let cat: FilterTag = "cat".parse().unwrap();
    let none: FilterTag = "".parse().unwrap();

    assert_eq!(ids(&filter::apply(&fetched.animals, dog)), vec![1]);
    assert_eq!(ids(&filter::apply(&fetched.animals, cat)), vec![2]);
    assert_eq!(ids(&filter::apply(&fetched.animals, none)), vec![1, 2]);
}

#[test]
fn detail_panel_record_keeps_panel_under_every_filter() {
    let body = r#"[
        {"id": 1680, "name": "Luna", "description": "Weiblich", "species_id": 2},
        {"id": 7, "name": "Max", "description": "Männlich, 3 Jahre", "species_id": 1}
    ]"#;
    let mut fetched = decode_animals(body.as_bytes()).unwrap();
    Config::default().detail_panel_rule().apply(&mut fetched.animals);

    for tag in FilterTag::ALL_TAGS {
        for animal in filter::apply(&fetched.animals, tag) {
            assert_eq!(animal.has_detail_panel, animal.id.value() == 1680, "tag {tag}");
        }
    }
    let cats = filter::apply(&fetched.animals, FilterTag::Cat);
    assert!(cats[0].has_detail_panel);
}

#[test]
fn detail_panel_ids_come_from_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[display]\ndetail_panel_ids = [7]\n").unwrap();

    let loaded = config::load_from_path(&path).unwrap();
    assert_eq!(loaded.detail_panel_rule(), DetailPanelRule::new([7]));
}

#[test]
fn malformed_records_are_counted_not_rendered() {
    let body = r#"[
        {"id": 1, "name": "Rex", "species_id": 1},
        {"id": "two", "name": "Broken", "species_id": 2},
        "not an object",
        {"id": 3, "species_id": 9}
    ]"#;
    let fetched = decode_animals(body.as_bytes()).unwrap();

    assert_eq!(fetched.skipped, 2);
    let all = filter::apply(&fetched.animals, FilterTag::All);
    assert_eq!(ids(&all), vec![1, 3]);
    assert_eq!(all[1].name, "");
    assert!(filter::apply(&fetched.animals, FilterTag::Male).is_empty());
}
