//! Line-based console front end.
//!
//! The console reads one command per line and renders session reports as
//! plain text. Input and output are injected so scripted runs can drive it.
use std::io::{self, BufRead, Write};

use game_core::{CombatStatus, EquipOutcome, EquipSlot, Item, ListingId, Side, Strike};
use runtime::{GameSession, SessionError};

/// Where the main loop goes after a screen returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Console front end over a [`GameSession`].
pub struct Console<R, W> {
    session: GameSession,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(session: GameSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gives back the session and the output sink.
    pub fn into_parts(self) -> (GameSession, W) {
        (self.session, self.output)
    }

    /// Runs the main menu until the player exits, input ends or the player
    /// is defeated.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!("Console started");
        loop {
            self.status_line()?;
            let Some(choice) = self.prompt("(1) Fight (2) Shop (3) Inventory (4) Exit")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.fight()?,
                "2" => self.shop()?,
                "3" => self.inventory()?,
                "4" => Flow::Quit,
                other => {
                    writeln!(self.output, "Unknown choice '{other}'.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        if self.session.is_game_over() {
            writeln!(self.output, "Game over.")?;
        } else {
            writeln!(self.output, "Farewell, {}.", self.session.player().name())?;
        }
        tracing::info!(
            gold = self.session.player().gold(),
            health = self.session.player().health(),
            "Console finished"
        );
        self.output.flush()
    }

    fn fight(&mut self) -> io::Result<Flow> {
        let enemy = match self.session.engage() {
            Ok(enemy) => enemy,
            Err(error) => {
                writeln!(self.output, "{}", describe(&error))?;
                return Ok(Flow::Continue);
            }
        };
        writeln!(
            self.output,
            "You face a {} (health {}, damage {}).",
            enemy.name,
            enemy.health(),
            enemy.damage
        )?;

        loop {
            let Some(choice) = self.prompt("Fight? [y]es / [h]eal / [n]o")? else {
                return Ok(Flow::Quit);
            };
            match choice.to_ascii_lowercase().as_str() {
                "y" | "yes" => {
                    if let Some(flow) = self.play_round()? {
                        return Ok(flow);
                    }
                }
                "h" | "heal" => match self.session.use_healer() {
                    Ok(restored) => writeln!(
                        self.output,
                        "You recover {} health (now {}).",
                        restored,
                        self.session.player().health()
                    )?,
                    Err(error) => writeln!(self.output, "{}", describe(&error))?,
                },
                "n" | "no" => {
                    if let Some(enemy) = self.session.retreat() {
                        writeln!(self.output, "You retreat from the {}.", enemy.name)?;
                    }
                    return Ok(Flow::Continue);
                }
                other => writeln!(self.output, "Unknown choice '{other}'.")?,
            }
        }
    }

    /// Plays one round. Returns `Some` when the fight is over.
    fn play_round(&mut self) -> io::Result<Option<Flow>> {
        let report = match self.session.fight_round() {
            Ok(report) => report,
            Err(error) => {
                writeln!(self.output, "{}", describe(&error))?;
                return Ok(Some(Flow::Continue));
            }
        };

        let enemy_name = self
            .session
            .encounter()
            .map(|enemy| enemy.name.clone())
            .unwrap_or_default();
        for strike in report.strikes() {
            writeln!(self.output, "{}", describe_strike(&strike, &enemy_name))?;
        }

        match report.status {
            CombatStatus::Ongoing => {
                let enemy_health = self
                    .session
                    .encounter()
                    .map(|enemy| enemy.health())
                    .unwrap_or_default();
                writeln!(
                    self.output,
                    "You: {} health. {}: {} health.",
                    self.session.player().health(),
                    enemy_name,
                    enemy_health
                )?;
                Ok(None)
            }
            CombatStatus::EnemyDefeated => {
                writeln!(
                    self.output,
                    "The {} is defeated! You earn {} gold.",
                    enemy_name,
                    report.reward.unwrap_or_default()
                )?;
                Ok(Some(Flow::Continue))
            }
            CombatStatus::PlayerDefeated => {
                writeln!(self.output, "You have been defeated by the {}.", enemy_name)?;
                Ok(Some(Flow::Quit))
            }
        }
    }

    fn shop(&mut self) -> io::Result<Flow> {
        let names: Vec<String> = self
            .session
            .shops()
            .iter()
            .enumerate()
            .map(|(index, shop)| format!("({}) {}", index + 1, shop.name()))
            .collect();
        if names.is_empty() {
            writeln!(self.output, "There are no shops here.")?;
            return Ok(Flow::Continue);
        }

        let Some(choice) = self.prompt(&format!("Choose a shop: {}", names.join(" ")))? else {
            return Ok(Flow::Quit);
        };
        let Some(shop_index) = parse_index(&choice, names.len()) else {
            writeln!(self.output, "No such shop.")?;
            return Ok(Flow::Continue);
        };

        let listing_count = match self.session.shop(shop_index) {
            Some(shop) => {
                writeln!(self.output, "Welcome to the {}.", shop.name())?;
                for (position, listing) in shop.listings().iter().enumerate() {
                    writeln!(
                        self.output,
                        "({}) {} - {} gold",
                        position + 1,
                        listing.item,
                        listing.price
                    )?;
                }
                shop.listings().len()
            }
            None => return Ok(Flow::Continue),
        };
        writeln!(self.output, "Gold: {}", self.session.player().gold())?;

        let Some(choice) = self.prompt("Buy which item? (blank to leave)")? else {
            return Ok(Flow::Quit);
        };
        if choice.is_empty() {
            return Ok(Flow::Continue);
        }
        let Some(position) = parse_index(&choice, listing_count) else {
            writeln!(self.output, "No such item.")?;
            return Ok(Flow::Continue);
        };

        let purchase = match self.session.buy(shop_index, ListingId(position as u32)) {
            Ok(purchase) => purchase,
            Err(error) => {
                writeln!(self.output, "{}", describe(&error))?;
                return Ok(Flow::Continue);
            }
        };
        writeln!(
            self.output,
            "You bought {} for {} gold.",
            purchase.item.name, purchase.price
        )?;

        let slot = slot_for(&purchase.item);
        let question = match slot {
            EquipSlot::Primary => "Equip as primary weapon? [y/n]",
            EquipSlot::Healer => "Equip as healer? [y/n]",
        };
        let Some(answer) = self.prompt(question)? else {
            return Ok(Flow::Quit);
        };
        if answer.eq_ignore_ascii_case("y") {
            self.equip(slot, purchase.handle, &purchase.item.name)?;
        }
        Ok(Flow::Continue)
    }

    fn inventory(&mut self) -> io::Result<Flow> {
        let player = self.session.player();
        if player.inventory().is_empty() {
            writeln!(self.output, "Your inventory is empty.")?;
            return Ok(Flow::Continue);
        }

        let equipment = player.equipment().clone();
        let lines: Vec<String> = player
            .inventory()
            .iter()
            .enumerate()
            .map(|(position, slot)| {
                let tag = if equipment.primary == Some(slot.handle) {
                    " [primary]"
                } else if equipment.healer == Some(slot.handle) {
                    " [healer]"
                } else {
                    ""
                };
                format!("({}) {}{}", position + 1, slot.item, tag)
            })
            .collect();
        for line in &lines {
            writeln!(self.output, "{line}")?;
        }

        let Some(choice) = self.prompt("Equip which item? (blank to leave)")? else {
            return Ok(Flow::Quit);
        };
        if choice.is_empty() {
            return Ok(Flow::Continue);
        }
        let selected = parse_index(&choice, lines.len()).and_then(|position| {
            self.session
                .player()
                .inventory()
                .slots()
                .get(position)
                .map(|slot| (slot.handle, slot_for(&slot.item), slot.item.name.clone()))
        });
        match selected {
            Some((handle, slot, name)) => self.equip(slot, handle, &name)?,
            None => writeln!(self.output, "No such item.")?,
        }
        Ok(Flow::Continue)
    }

    fn equip(
        &mut self,
        slot: EquipSlot,
        handle: game_core::ItemHandle,
        name: &str,
    ) -> io::Result<()> {
        match self.session.equip(slot, handle) {
            Ok(EquipOutcome::Equipped) => {
                writeln!(self.output, "{} equipped as {}.", name, slot_label(slot))
            }
            Ok(EquipOutcome::Rejected) => writeln!(self.output, "You do not own {}.", name),
            Err(error) => writeln!(self.output, "{}", describe(&error)),
        }
    }

    fn status_line(&mut self) -> io::Result<()> {
        let player = self.session.player();
        writeln!(
            self.output,
            "{} | Health: {}/{} | Gold: {}",
            player.name(),
            player.health(),
            player.max_health(),
            player.gold()
        )
    }

    /// Prints `text` and reads one trimmed line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}\n> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Items that restore health go to the healer slot, everything else is a
/// weapon.
fn slot_for(item: &Item) -> EquipSlot {
    if item.is_consumable() {
        EquipSlot::Healer
    } else {
        EquipSlot::Primary
    }
}

fn slot_label(slot: EquipSlot) -> &'static str {
    match slot {
        EquipSlot::Primary => "primary weapon",
        EquipSlot::Healer => "healer",
    }
}

/// One-based menu number to zero-based index.
fn parse_index(choice: &str, len: usize) -> Option<usize> {
    let number: usize = choice.parse().ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}

fn describe_strike(strike: &Strike, enemy: &str) -> String {
    match strike.actor {
        Side::Player => format!("You hit the {} for {} damage.", enemy, strike.amount),
        Side::Enemy => format!("The {} hits you for {} damage.", enemy, strike.amount),
    }
}

fn describe(error: &SessionError) -> String {
    tracing::debug!(%error, "Action rejected");
    match error {
        SessionError::Attack(_) => "You have no weapon to fight with.".to_string(),
        SessionError::Heal(_) => "You have no healer equipped.".to_string(),
        SessionError::EmptyBestiary => "There is nothing to fight.".to_string(),
        other => capitalize(&other.to_string()),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
