use std::fs;

use game_content::{BUNDLED_DATA_DIR, ContentFactory};
use game_core::{
    AttackError, Attributes, Bestiary, CombatStatus, Durability, EnemyTemplate, EquipError,
    EquipOutcome, EquipSlot, FixedRng, GameConfig, Item, ItemHandle, ListingId, Player,
};
use runtime::{GameSession, SessionError};

fn bundled_session() -> GameSession {
    GameSession::builder()
        .content(&ContentFactory::bundled())
        .unwrap()
        .rng(FixedRng(0))
        .build()
        .unwrap()
}

fn armed(session: &mut GameSession) {
    let sword = session.buy(0, ListingId(0)).unwrap();
    assert_eq!(
        session.equip(EquipSlot::Primary, sword.handle).unwrap(),
        EquipOutcome::Equipped
    );
}

#[test]
fn unarmed_player_cannot_fight() {
    let mut session = bundled_session();

    assert_eq!(
        session.fight_round(),
        Err(SessionError::Attack(AttackError::UnavailableWeapon))
    );

    let goblin = session.encounter().unwrap();
    assert_eq!(goblin.name, "Goblin");
    assert_eq!(goblin.health(), 30);
    assert_eq!(session.player().health(), 100);
}

#[test]
fn goblin_hunt_pays_once_and_respawns() {
    let mut session = bundled_session();
    armed(&mut session);
    assert_eq!(session.player().gold(), 30);

    let first = session.fight_round().unwrap();
    assert_eq!(first.status, CombatStatus::Ongoing);
    session.fight_round().unwrap();
    let third = session.fight_round().unwrap();
    assert_eq!(third.status, CombatStatus::EnemyDefeated);
    assert_eq!(third.reward, Some(10));
    assert_eq!(session.player().gold(), 40);
    assert_eq!(session.player().health(), 90);
    assert_eq!(session.encounter().unwrap().health(), 0);

    let next = session.engage().unwrap();
    assert_eq!(next.health(), 30);
    assert!(!next.reward_claimed());
    assert_eq!(session.player().gold(), 40);
}

#[test]
fn healer_restores_up_to_base_health() {
    let mut session = bundled_session();
    let potion = session.buy_by_name("Potion Shop", "Health Potion").unwrap();
    session.equip(EquipSlot::Healer, potion.handle).unwrap();
    armed(&mut session);
    assert_eq!(session.player().gold(), 20);

    assert_eq!(session.use_healer(), Ok(0));
    session.fight_round().unwrap();
    assert_eq!(session.player().health(), 95);
    assert_eq!(session.use_healer(), Ok(5));
    assert_eq!(session.player().health(), 100);
    assert_eq!(
        session.player().healer().unwrap().durability,
        Durability::Unbounded
    );
}

#[test]
fn equip_policy_follows_config() {
    let mut lenient = bundled_session();
    assert_eq!(
        lenient.equip(EquipSlot::Primary, ItemHandle(99)),
        Ok(EquipOutcome::Rejected)
    );

    let mut strict = GameSession::builder()
        .content(&ContentFactory::bundled())
        .unwrap()
        .config(GameConfig::default().with_strict_equipment(true))
        .build()
        .unwrap();
    assert_eq!(
        strict.equip(EquipSlot::Primary, ItemHandle(99)),
        Err(SessionError::Equip(EquipError::InvalidEquipment {
            slot: EquipSlot::Primary,
            handle: ItemHandle(99),
        }))
    );
}

#[test]
fn unknown_shops_are_reported() {
    let mut session = bundled_session();

    assert_eq!(
        session.buy(7, ListingId(0)),
        Err(SessionError::UnknownShop { shop: "#7".into() })
    );
    assert!(matches!(
        session.buy_by_name("Armory", "Sword"),
        Err(SessionError::UnknownShop { .. })
    ));
    assert!(matches!(
        session.buy(1, ListingId(5)),
        Err(SessionError::Shop(_))
    ));
    assert_eq!(session.player().gold(), 50);
}

#[test]
fn defeated_player_ends_the_game() {
    let player = Player::with_items(
        Attributes::named("Hero").with_health(5),
        0,
        [Item::weapon("Twig", 1, 10)],
    );
    let mut session = GameSession::builder()
        .player(player)
        .bestiary(Bestiary::new(vec![EnemyTemplate::new("Ogre", 100, 10, 50)]))
        .rng(FixedRng(0))
        .build()
        .unwrap();

    let report = session.fight_round().unwrap();
    assert_eq!(report.status, CombatStatus::PlayerDefeated);
    assert_eq!(report.reward, None);
    assert!(session.is_game_over());

    assert_eq!(session.fight_round(), Err(SessionError::PlayerDefeated));
    assert_eq!(session.use_healer(), Err(SessionError::PlayerDefeated));
    assert_eq!(session.player().gold(), 0);
    assert_eq!(session.encounter().unwrap().health(), 99);
}

#[test]
fn retreat_drops_the_encounter() {
    let mut session = bundled_session();
    session.engage().unwrap();

    let fled = session.retreat().unwrap();
    assert_eq!(fled.name, "Goblin");
    assert!(session.encounter().is_none());
    assert!(session.retreat().is_none());
}

#[test]
fn seeded_encounters_come_from_the_bestiary() {
    let mut session = GameSession::builder()
        .content(&ContentFactory::bundled())
        .unwrap()
        .seed(7)
        .build()
        .unwrap();

    for _ in 0..20 {
        let name = session.engage().unwrap().name.clone();
        assert!(name == "Goblin" || name == "Troll", "unexpected {name}");
        session.retreat();
    }
}

#[test]
fn session_requires_player_and_enemies() {
    assert!(matches!(
        GameSession::builder().build(),
        Err(SessionError::MissingPlayer)
    ));

    let mut empty = GameSession::builder()
        .player(Player::new(Attributes::named("Hero"), 0))
        .build()
        .unwrap();
    assert!(matches!(empty.engage(), Err(SessionError::EmptyBestiary)));
}

#[test]
fn session_built_from_custom_content_dir() {
    let dir = tempfile::tempdir().unwrap();
    for file in ["shops.ron", "bestiary.ron"] {
        fs::copy(format!("{BUNDLED_DATA_DIR}/{file}"), dir.path().join(file)).unwrap();
    }
    fs::write(
        dir.path().join("config.toml"),
        "wear_min = 2\nwear_max = 2\nstrict_equipment = true\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("hero.ron"),
        r#"(
            attributes: (name: "Knight", health: 60),
            gold: 5,
            items: [(name: "Spear", damage: 12, durability: Finite(5))],
        )"#,
    )
    .unwrap();

    let mut session = GameSession::builder()
        .content(&ContentFactory::new(dir.path()))
        .unwrap()
        .rng(FixedRng(0))
        .build()
        .unwrap();
    assert_eq!(session.player().name(), "Knight");
    assert_eq!(session.player().max_health(), 60);
    assert_eq!(session.player().gold(), 5);

    let spear = session.player().inventory().handle_at(0).unwrap();
    session.equip(EquipSlot::Primary, spear).unwrap();
    session.fight_round().unwrap();

    assert_eq!(session.encounter().unwrap().health(), 18);
    assert_eq!(
        session.player().primary().unwrap().durability,
        Durability::Finite(3)
    );
    assert!(matches!(
        session.equip(EquipSlot::Healer, ItemHandle(42)),
        Err(SessionError::Equip(_))
    ));
}
