use std::fs;

use game_content::{BUNDLED_DATA_DIR, ContentFactory};
use game_core::{Durability, GameConfig, ListingId};

#[test]
fn bundled_content_loads() {
    let factory = ContentFactory::bundled();

    assert_eq!(factory.load_config().unwrap(), GameConfig::default());

    let hero = factory.load_hero().unwrap().into_player();
    assert_eq!(hero.name(), "Hero");
    assert_eq!(hero.health(), 100);
    assert_eq!(hero.gold(), 50);

    let shops = factory.load_shops().unwrap();
    let names: Vec<&str> = shops.iter().map(|shop| shop.name()).collect();
    assert_eq!(names, ["Blacksmith", "Potion Shop"]);
    assert_eq!(shops[0].price_of(ListingId(0)), Some(20));
    let potion = &shops[1].listing(ListingId(0)).unwrap().item;
    assert_eq!(potion.durability, Durability::Unbounded);
    assert_eq!(potion.restores, 10);

    let bestiary = factory.load_bestiary().unwrap();
    let enemies: Vec<&str> = bestiary.templates().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(enemies, ["Goblin", "Troll"]);
}

#[test]
fn custom_data_dir_overrides_bundled_files() {
    let dir = tempfile::tempdir().unwrap();
    for file in ["hero.ron", "shops.ron", "bestiary.ron"] {
        fs::copy(
            format!("{BUNDLED_DATA_DIR}/{file}"),
            dir.path().join(file),
        )
        .unwrap();
    }
    fs::write(
        dir.path().join("config.toml"),
        "wear_min = 1\nwear_max = 1\nstrict_equipment = true\n",
    )
    .unwrap();

    let config = ContentFactory::new(dir.path()).load_config().unwrap();
    assert_eq!(config.wear_range(), (1, 1));
    assert!(config.strict_equipment);
}

#[test]
fn malformed_bestiary_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bestiary.ron"), "(enemies: [(name: 3)])").unwrap();

    let err = ContentFactory::new(dir.path()).load_bestiary().unwrap_err();
    assert!(err.to_string().contains("bestiary"));
}
