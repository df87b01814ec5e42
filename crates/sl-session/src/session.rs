//! Game session management.
//!
//! `GameSession` owns everything one table needs at play time: the
//! campaign, the action deck and turn order, status tokens, the benny
//! pool, and a journal. A line of input goes through
//! [`GameSession::process`] and comes back as a formatted reply.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sl_core::{Campaign, Character, CoreError, Monster};
use sl_mechanics::{ActionDeck, RollExpression, TurnOrder};

use crate::command::{parse_update, split_name_and_pairs, split_trailing_int};
use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::journal::entry::JournalEntry;
use crate::journal::log::Journal;
use crate::tracker::bennies::BennyPool;
use crate::tracker::tokens::{Token, TokenBoard};

/// An interactive game session over one campaign.
pub struct GameSession {
    campaign: Campaign,
    deck: ActionDeck,
    order: TurnOrder,
    encounter_name: Option<String>,
    tokens: TokenBoard,
    bennies: BennyPool,
    journal: Journal,
    config: SessionConfig,
    rng: StdRng,
}

impl GameSession {
    /// Create a session over a campaign.
    pub fn new(campaign: Campaign, config: SessionConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let deck = ActionDeck::new(&mut rng);
        let bennies = BennyPool::new(config.benny_bank);
        Self {
            campaign,
            deck,
            order: TurnOrder::new(),
            encounter_name: None,
            tokens: TokenBoard::new(),
            bennies,
            journal: Journal::new(),
            config,
            rng,
        }
    }

    /// The campaign being played.
    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    /// The action deck.
    pub fn deck(&self) -> &ActionDeck {
        &self.deck
    }

    /// The turn order.
    pub fn order(&self) -> &TurnOrder {
        &self.order
    }

    /// The token board.
    pub fn tokens(&self) -> &TokenBoard {
        &self.tokens
    }

    /// The benny pool.
    pub fn bennies(&self) -> &BennyPool {
        &self.bennies
    }

    /// The journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Process a line of user input and return a reply.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "deal" => self.do_deal(rest),
            "card" => self.do_card(rest),
            "next" => self.do_next(),
            "turn" => self.do_turn(),
            "order" => self.do_order(),
            "hand" => self.do_hand(rest),
            "shuffle" => self.do_shuffle(),
            "end" => self.do_end(),
            "deck" => self.do_deck(),
            "roll" => self.do_roll(rest),
            "token" => self.do_token(rest),
            "tokens" => self.do_token_list(rest),
            "benny" => self.do_benny(rest),
            "bennies" => self.do_benny_list(rest),
            "char" => self.do_char(rest),
            "chars" => self.do_char_list(),
            "monster" => self.do_monster(rest),
            "monsters" => self.do_monster_list(),
            "enc" => self.do_encounter(rest),
            "encs" => self.do_encounter_list(),
            "store" => self.do_store(rest),
            "buy" => self.do_buy(rest),
            "money" => self.do_money(rest),
            "note" => self.do_note(rest),
            "journal" => self.do_journal_show(),
            "export" => self.do_journal_export(rest),
            "status" => self.do_status(),
            "help" => self.do_help(rest),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(SessionError::UnknownCommand(cmd)),
        }
    }

    fn do_deal(&mut self, rest: &str) -> SessionResult<String> {
        let (roster, encounter) = if rest.is_empty() {
            (self.campaign.default_roster(), None)
        } else {
            let roster = self.campaign.roster(rest)?;
            let name = self.campaign.encounter(rest).map(|e| e.name.clone());
            (roster, name)
        };
        if roster.is_empty() {
            return Ok("No participants to deal to.".to_string());
        }

        let report = self.order.deal_initiative(&mut self.deck, &roster);
        self.encounter_name = encounter.clone();

        let lines: Vec<String> = report
            .order
            .iter()
            .map(|e| format!("{}: {}", e.participant, e.card))
            .collect();
        self.journal.append(JournalEntry::InitiativeDealt {
            encounter,
            order: lines.clone(),
            skipped: report.skipped.clone(),
            timestamp: Utc::now(),
        });

        let mut out = String::new();
        if lines.is_empty() {
            out.push_str("The deck ran out; nobody was dealt a card. 'end' resets it.\n");
        } else {
            match &self.encounter_name {
                Some(name) => out.push_str(&format!("Initiative for {name} (round 1):\n")),
                None => out.push_str("Initiative (round 1):\n"),
            }
            for (i, line) in lines.iter().enumerate() {
                out.push_str(&format!("  {}. {line}\n", i + 1));
            }
        }
        if !report.skipped.is_empty() {
            out.push_str(&format!("No cards left for: {}\n", report.skipped.join(", ")));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_card(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::Usage("usage: card <participant>".to_string()));
        }
        let who = self.campaign.member_name(rest)?;
        let card = self.deck.deal(who.clone());
        self.journal.append(JournalEntry::CardDrawn {
            participant: who.clone(),
            card: card.map(|c| c.to_string()),
            timestamp: Utc::now(),
        });
        match card {
            Some(card) => Ok(format!("{who} draws the {card}.")),
            None => Ok(format!("The deck is empty; no card for {who}.")),
        }
    }

    fn do_next(&mut self) -> SessionResult<String> {
        let (participant, card) = {
            let entry = self.order.next_turn()?;
            (entry.participant.clone(), entry.card)
        };
        let round = self.order.round();
        self.journal.append(JournalEntry::TurnAdvanced {
            participant: participant.clone(),
            card: card.to_string(),
            round,
            timestamp: Utc::now(),
        });
        if self.order.position() == 0 && round > 1 {
            Ok(format!("Round {round}! {participant} is up ({card})."))
        } else {
            Ok(format!("{participant} is up ({card})."))
        }
    }

    fn do_turn(&self) -> SessionResult<String> {
        let entry = self.order.current()?;
        Ok(format!(
            "Current turn: {} ({}), round {}.",
            entry.participant,
            entry.card,
            self.order.round()
        ))
    }

    fn do_order(&self) -> SessionResult<String> {
        if !self.order.is_active() {
            return Ok("No initiative order; use 'deal'.".to_string());
        }
        let mut out = format!("Turn order (round {}):\n", self.order.round());
        for (i, entry) in self.order.entries().iter().enumerate() {
            let marker = if i == self.order.position() { '*' } else { ' ' };
            out.push_str(&format!(
                "{marker} {}. {}: {}\n",
                i + 1,
                entry.participant,
                entry.card
            ));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_hand(&self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::Usage("usage: hand <participant>".to_string()));
        }
        let who = self.campaign.member_name(rest)?;
        match self.deck.hand(&who) {
            Ok(cards) => {
                let names: Vec<String> = cards.iter().map(ToString::to_string).collect();
                Ok(format!("{who} holds: {}.", names.join(", ")))
            }
            // No hand entry just means nothing dealt yet.
            Err(_) => Ok(format!("{who} has not been dealt any cards.")),
        }
    }

    fn do_shuffle(&mut self) -> SessionResult<String> {
        self.deck.shuffle_remaining(&mut self.rng);
        Ok(format!(
            "Shuffled the remaining {} cards.",
            self.deck.remaining()
        ))
    }

    fn do_end(&mut self) -> SessionResult<String> {
        let was_active = self.order.is_active();
        let rounds = self.order.round();
        self.order.end();
        self.deck.reset(&mut self.rng);
        self.encounter_name = None;
        if was_active {
            self.journal.append(JournalEntry::EncounterEnded {
                rounds,
                timestamp: Utc::now(),
            });
            Ok(format!(
                "Encounter over after {rounds} round(s). Deck reset to {} cards.",
                ActionDeck::FULL_SIZE
            ))
        } else {
            Ok(format!(
                "No encounter running; deck reset to {} cards.",
                ActionDeck::FULL_SIZE
            ))
        }
    }

    fn do_deck(&self) -> SessionResult<String> {
        Ok(format!(
            "{} of {} cards remaining.",
            self.deck.remaining(),
            ActionDeck::FULL_SIZE
        ))
    }

    fn do_roll(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::Usage(
                "usage: roll <expression>, e.g. roll 3d6+2".to_string(),
            ));
        }
        let expr = RollExpression::parse(rest)?;
        let outcome = expr.roll(&mut self.rng);
        self.journal.append(JournalEntry::DiceRolled {
            expression: expr.to_string(),
            values: outcome.rolls.clone(),
            total: outcome.total,
            timestamp: Utc::now(),
        });
        Ok(format!("Rolled {expr}: {outcome}"))
    }

    fn do_token(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match sub.as_str() {
            "give" | "remove" if !arg.is_empty() => {
                let (name, token_word) = match arg.rsplit_once(' ') {
                    Some((name, token_word)) => (name.trim(), token_word),
                    None => {
                        return Err(SessionError::Usage(
                            "usage: token give|remove <participant> <token>".to_string(),
                        ));
                    }
                };
                let token = Token::parse(token_word)
                    .ok_or_else(|| SessionError::UnknownToken(token_word.to_string()))?;
                let who = self.campaign.member_name(name)?;
                if sub == "give" {
                    if self.tokens.give(who.clone(), token) {
                        Ok(format!("{who} is now {token}."))
                    } else {
                        Ok(format!("{who} already has {token}."))
                    }
                } else if self.tokens.remove(&who, token) {
                    Ok(format!("Removed {token} from {who}."))
                } else {
                    Ok(format!("{who} does not have {token}."))
                }
            }
            "clear" if !arg.is_empty() => {
                let who = self.campaign.member_name(arg)?;
                let dropped = self.tokens.clear(&who);
                Ok(format!("Cleared {dropped} token(s) from {who}."))
            }
            _ => Err(SessionError::Usage(
                "usage: token give|remove <participant> <token>, token clear <participant>"
                    .to_string(),
            )),
        }
    }

    fn do_token_list(&self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            if self.tokens.is_empty() {
                return Ok("No tokens in play.".to_string());
            }
            let mut out = String::from("Tokens in play:\n");
            for (name, set) in self.tokens.all() {
                let names: Vec<String> = set.iter().map(ToString::to_string).collect();
                out.push_str(&format!("  {name}: {}\n", names.join(", ")));
            }
            return Ok(out.trim_end().to_string());
        }
        let who = self.campaign.member_name(rest)?;
        let tokens = self.tokens.of(&who);
        if tokens.is_empty() {
            return Ok(format!("{who} has no tokens."));
        }
        let names: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        Ok(format!("{who}: {}", names.join(", ")))
    }

    fn do_benny(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");
        if arg.is_empty() {
            return Err(SessionError::Usage(
                "usage: benny give|use <participant> [count]".to_string(),
            ));
        }

        let (name, count) = match split_trailing_int(arg) {
            Some((name, n)) => {
                let count = u32::try_from(n)
                    .ok()
                    .filter(|count| *count > 0)
                    .ok_or_else(|| {
                        SessionError::Usage("benny count must be at least 1".to_string())
                    })?;
                (name, count)
            }
            None => (arg, 1),
        };
        let who = self.campaign.member_name(name)?;
        let noun = if count == 1 { "benny" } else { "bennies" };

        match sub.as_str() {
            "give" => {
                self.bennies.give(who.clone(), count)?;
                self.journal.append(JournalEntry::BennyGiven {
                    participant: who.clone(),
                    count,
                    bank: self.bennies.bank(),
                    timestamp: Utc::now(),
                });
                Ok(format!(
                    "Gave {count} {noun} to {who} ({who}: {}, bank: {}).",
                    self.bennies.balance(&who),
                    self.bennies.bank()
                ))
            }
            "use" | "spend" => {
                self.bennies.spend(&who, count)?;
                self.journal.append(JournalEntry::BennySpent {
                    participant: who.clone(),
                    count,
                    bank: self.bennies.bank(),
                    timestamp: Utc::now(),
                });
                Ok(format!(
                    "{who} spends {count} {noun} ({who}: {}, bank: {}).",
                    self.bennies.balance(&who),
                    self.bennies.bank()
                ))
            }
            _ => Err(SessionError::Usage(
                "usage: benny give|use <participant> [count]".to_string(),
            )),
        }
    }

    fn do_benny_list(&self, rest: &str) -> SessionResult<String> {
        if !rest.is_empty() {
            let who = self.campaign.member_name(rest)?;
            let balance = self.bennies.balance(&who);
            let noun = if balance == 1 { "benny" } else { "bennies" };
            return Ok(format!(
                "{who}: {balance} {noun} (bank: {}).",
                self.bennies.bank()
            ));
        }
        let balances = self.bennies.balances();
        if balances.is_empty() {
            return Ok(format!(
                "Benny bank: {}. Nobody holds bennies.",
                self.bennies.bank()
            ));
        }
        let mut out = format!("Benny bank: {}\n", self.bennies.bank());
        for (name, balance) in balances {
            out.push_str(&format!("  {name}: {balance}\n"));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_char(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match sub.as_str() {
            "create" if !arg.is_empty() => {
                let (name, pairs) = split_name_and_pairs(arg);
                if name.is_empty() {
                    return Err(SessionError::Usage(
                        "usage: char create <name> [key=value ...]".to_string(),
                    ));
                }
                let update = parse_update(&pairs)?;
                self.campaign.create_character(name.clone())?;
                if !update.is_empty() {
                    self.campaign.update_character(&name, update)?;
                }
                Ok(format!("Created character {name}."))
            }
            "update" if !arg.is_empty() => {
                let (name, pairs) = split_name_and_pairs(arg);
                let update = parse_update(&pairs)?;
                if name.is_empty() || update.is_empty() {
                    return Err(SessionError::Usage(
                        "usage: char update <name> <key=value ...>".to_string(),
                    ));
                }
                let c = self.campaign.update_character(&name, update)?;
                Ok(format!("Updated {}.", c.name))
            }
            "show" if !arg.is_empty() => {
                let c = self
                    .campaign
                    .character(arg)
                    .ok_or_else(|| CoreError::UnknownCharacter(arg.to_string()))?;
                Ok(format_character(c))
            }
            "delete" if !arg.is_empty() => {
                let removed = self.campaign.remove_character(arg)?;
                Ok(format!("Removed character {}.", removed.name))
            }
            _ => Err(SessionError::Usage(
                "usage: char create|update|show|delete <name> ...".to_string(),
            )),
        }
    }

    fn do_char_list(&self) -> SessionResult<String> {
        let characters = self.campaign.characters();
        if characters.is_empty() {
            return Ok("No characters yet.".to_string());
        }
        let mut out = format!("Characters ({}):\n", characters.len());
        for (i, c) in characters.iter().enumerate() {
            let down = if c.is_alive() { "" } else { " [down]" };
            out.push_str(&format!(
                "  {}. {} (health {}, money {}){down}\n",
                i + 1,
                c.name,
                c.health,
                c.money
            ));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_monster(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match sub.as_str() {
            "create" if !arg.is_empty() => {
                let (name, health) = match split_trailing_int(arg) {
                    Some((name, health)) => (name.to_string(), health),
                    None => (arg.to_string(), Monster::DEFAULT_HEALTH),
                };
                self.campaign.create_monster(name.clone(), health)?;
                Ok(format!("Created monster {name} (health {}).", health.max(0)))
            }
            "hp" if !arg.is_empty() => {
                let (name, delta) = split_trailing_int(arg).ok_or_else(|| {
                    SessionError::Usage("usage: monster hp <name> <delta>".to_string())
                })?;
                let m = self.campaign.adjust_monster_health(name, delta)?;
                if m.is_alive() {
                    Ok(format!("{} now has {} health.", m.name, m.health))
                } else {
                    Ok(format!("{} is down (0 health).", m.name))
                }
            }
            "delete" if !arg.is_empty() => {
                let removed = self.campaign.remove_monster(arg)?;
                Ok(format!("Removed monster {}.", removed.name))
            }
            _ => Err(SessionError::Usage(
                "usage: monster create|hp|delete <name> ...".to_string(),
            )),
        }
    }

    fn do_monster_list(&self) -> SessionResult<String> {
        let monsters = self.campaign.monsters();
        if monsters.is_empty() {
            return Ok("No monsters yet.".to_string());
        }
        let mut out = format!("Monsters ({}):\n", monsters.len());
        for (i, m) in monsters.iter().enumerate() {
            let down = if m.is_alive() { "" } else { " [down]" };
            out.push_str(&format!(
                "  {}. {} (health {}){down}\n",
                i + 1,
                m.name,
                m.health
            ));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_encounter(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match sub.as_str() {
            "create" if !arg.is_empty() => {
                self.campaign.create_encounter(arg)?;
                Ok(format!("Created encounter {arg}."))
            }
            "add" | "remove" if !arg.is_empty() => {
                let (enc, member) = match arg.split_once(' ') {
                    Some((enc, member)) => (enc, member.trim()),
                    None => {
                        return Err(SessionError::Usage(
                            "usage: enc add|remove <encounter> <member>".to_string(),
                        ));
                    }
                };
                let enc_name = self
                    .campaign
                    .encounter(enc)
                    .map(|e| e.name.clone())
                    .ok_or_else(|| CoreError::UnknownEncounter(enc.to_string()))?;
                if sub == "add" {
                    let who = self.campaign.member_name(member)?;
                    if self.campaign.add_encounter_member(&enc_name, &who)? {
                        Ok(format!("Added {who} to {enc_name}."))
                    } else {
                        Ok(format!("{who} is already in {enc_name}."))
                    }
                } else if self.campaign.remove_encounter_member(&enc_name, member)? {
                    Ok(format!("Removed {member} from {enc_name}."))
                } else {
                    Ok(format!("{member} is not in {enc_name}."))
                }
            }
            "show" if !arg.is_empty() => {
                let e = self
                    .campaign
                    .encounter(arg)
                    .ok_or_else(|| CoreError::UnknownEncounter(arg.to_string()))?;
                if e.is_empty() {
                    return Ok(format!("{} has no members.", e.name));
                }
                let mut out = format!("{} ({} members):\n", e.name, e.len());
                for (i, member) in e.members.iter().enumerate() {
                    let kind = if self.campaign.character(member).is_some() {
                        "character"
                    } else if self.campaign.monster(member).is_some() {
                        "monster"
                    } else {
                        "missing"
                    };
                    out.push_str(&format!("  {}. {member} ({kind})\n", i + 1));
                }
                Ok(out.trim_end().to_string())
            }
            "delete" if !arg.is_empty() => {
                let removed = self.campaign.remove_encounter(arg)?;
                Ok(format!("Removed encounter {}.", removed.name))
            }
            _ => Err(SessionError::Usage(
                "usage: enc create|add|remove|show|delete <name> ...".to_string(),
            )),
        }
    }

    fn do_encounter_list(&self) -> SessionResult<String> {
        let encounters = self.campaign.encounters();
        if encounters.is_empty() {
            return Ok("No encounters yet.".to_string());
        }
        let mut out = format!("Encounters ({}):\n", encounters.len());
        for (i, e) in encounters.iter().enumerate() {
            out.push_str(&format!("  {}. {} ({} members)\n", i + 1, e.name, e.len()));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_store(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            let items = self.campaign.store.items();
            if items.is_empty() {
                return Ok("The store is empty.".to_string());
            }
            let mut out = format!("Store ({} items):\n", items.len());
            for item in items {
                out.push_str(&format!("  {}: {}\n", item.name, item.price));
            }
            return Ok(out.trim_end().to_string());
        }

        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match sub.as_str() {
            "add" if !arg.is_empty() => {
                let (name, price) = split_trailing_int(arg).ok_or_else(|| {
                    SessionError::Usage("usage: store add <item> <price>".to_string())
                })?;
                self.campaign.store.add(name, price)?;
                Ok(format!("Stocked {name} at {price}."))
            }
            "remove" if !arg.is_empty() => {
                if self.campaign.store.remove(arg) {
                    Ok(format!("Removed {arg} from the store."))
                } else {
                    Ok(format!("No store item named '{arg}'."))
                }
            }
            _ => Err(SessionError::Usage(
                "usage: store [add <item> <price> | remove <item>]".to_string(),
            )),
        }
    }

    fn do_buy(&mut self, rest: &str) -> SessionResult<String> {
        let words: Vec<&str> = rest.split_whitespace().collect();
        if words.len() < 2 {
            return Err(SessionError::Usage(
                "usage: buy <character> <item> [quantity]".to_string(),
            ));
        }
        let character = words[0];
        let (item_words, quantity) = match words.last().and_then(|w| w.parse::<u32>().ok()) {
            Some(quantity) if words.len() >= 3 => (&words[1..words.len() - 1], quantity),
            _ => (&words[1..], 1),
        };
        if quantity == 0 {
            return Err(SessionError::Usage(
                "quantity must be at least 1".to_string(),
            ));
        }
        let item = item_words.join(" ");

        let who = self
            .campaign
            .character(character)
            .map(|c| c.name.clone())
            .ok_or_else(|| CoreError::UnknownCharacter(character.to_string()))?;
        let item_name = self
            .campaign
            .store
            .find(&item)
            .map(|i| i.name.clone())
            .ok_or_else(|| CoreError::UnknownItem(item.clone()))?;
        let paid = self.campaign.buy(&who, &item_name, quantity)?;
        let left = self.campaign.character(&who).map_or(0, |c| c.money);

        self.journal.append(JournalEntry::Purchase {
            character: who.clone(),
            item: item_name.clone(),
            quantity,
            paid,
            timestamp: Utc::now(),
        });
        Ok(format!(
            "{who} buys {quantity}x {item_name} for {paid} (money left: {left})."
        ))
    }

    fn do_money(&mut self, rest: &str) -> SessionResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

        let (name, amount) = match split_trailing_int(arg) {
            Some((name, amount)) if amount > 0 => (name, amount),
            _ => {
                return Err(SessionError::Usage(
                    "usage: money give|take <character> <amount>".to_string(),
                ));
            }
        };
        let who = self
            .campaign
            .character(name)
            .map(|c| c.name.clone())
            .ok_or_else(|| CoreError::UnknownCharacter(name.to_string()))?;

        match sub.as_str() {
            "give" => {
                let balance = self.campaign.give_money(&who, amount)?;
                Ok(format!("{who} now has {balance} coins."))
            }
            "take" => {
                let balance = self.campaign.take_money(&who, amount)?;
                Ok(format!("{who} now has {balance} coins."))
            }
            _ => Err(SessionError::Usage(
                "usage: money give|take <character> <amount>".to_string(),
            )),
        }
    }

    fn do_note(&mut self, text: &str) -> SessionResult<String> {
        if text.is_empty() {
            return Err(SessionError::Usage("usage: note <text>".to_string()));
        }
        self.journal.append(JournalEntry::Note {
            text: text.to_string(),
            timestamp: Utc::now(),
        });
        Ok("Note recorded.".to_string())
    }

    fn do_journal_show(&self) -> SessionResult<String> {
        if self.journal.is_empty() {
            return Ok("Journal is empty.".to_string());
        }
        let entries = self.journal.entries();
        let start = entries.len().saturating_sub(self.config.journal_window);
        let recent = &entries[start..];

        let mut out = format!(
            "Journal ({} entries, showing last {}):\n\n",
            entries.len(),
            recent.len()
        );
        // Use a mini-journal for formatting
        let mut mini = Journal::new();
        for e in recent {
            mini.append(e.clone());
        }
        out.push_str(&mini.export_text());
        Ok(out.trim_end().to_string())
    }

    fn do_journal_export(&self, format: &str) -> SessionResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.journal.export_markdown()),
            "text" | "txt" => Ok(self.journal.export_text()),
            other => Err(SessionError::Usage(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    fn do_status(&self) -> SessionResult<String> {
        let mut out = format!("Campaign: {}\n", self.campaign.name);
        out.push_str(&format!(
            "Characters: {}, monsters: {}, encounters: {}\n",
            self.campaign.characters().len(),
            self.campaign.monsters().len(),
            self.campaign.encounters().len()
        ));
        out.push_str(&format!(
            "Deck: {} of {} cards\n",
            self.deck.remaining(),
            ActionDeck::FULL_SIZE
        ));
        if self.order.is_active() {
            match &self.encounter_name {
                Some(name) => out.push_str(&format!(
                    "Initiative: {name}, round {}, turn {} of {}\n",
                    self.order.round(),
                    self.order.position() + 1,
                    self.order.len()
                )),
                None => out.push_str(&format!(
                    "Initiative: round {}, turn {} of {}\n",
                    self.order.round(),
                    self.order.position() + 1,
                    self.order.len()
                )),
            }
        } else {
            out.push_str("No encounter running.\n");
        }
        out.push_str(&format!("Benny bank: {}\n", self.bennies.bank()));
        out.push_str(&format!("Journal: {} entries", self.journal.len()));
        Ok(out)
    }

    fn do_help(&self, topic: &str) -> SessionResult<String> {
        match topic.to_lowercase().as_str() {
            "deal" | "initiative" | "deck" => Ok("\
Initiative Commands:
  deal [encounter]              Deal initiative (default: living characters)
  card <participant>            Deal one extra card
  next                          Advance the turn
  turn                          Show whose turn it is
  order                         Reprint the ranked order
  hand <participant>            Show cards dealt this round
  shuffle                       Shuffle the undealt cards
  deck                          Show remaining card count
  end                           End the encounter, reset the deck"
                .to_string()),
            "roll" | "dice" => Ok("\
Dice Commands:
  roll <expr>                   Roll dice, e.g. roll 3d6+2 or roll d20-1

Expressions are NdS with optional +M/-M modifiers, up to 100 dice
of up to 1000 sides each."
                .to_string()),
            "token" | "tokens" => Ok("\
Token Commands:
  token give <participant> <token>    Hand out a status token
  token remove <participant> <token>  Take one back
  token clear <participant>           Drop all their tokens
  tokens [participant]                Show tokens in play

Tokens: shaken, aim, entangled, wounded, bound, fatigue, stunned,
  vulnerable, defend, hold, distracted"
                .to_string()),
            "benny" | "bennies" => Ok("\
Benny Commands:
  benny give <participant> [n]  Hand out bennies from the bank
  benny use <participant> [n]   Spend bennies back into the bank
  bennies [participant]         Show balances and the bank"
                .to_string()),
            "char" | "chars" | "character" | "characters" => Ok("\
Character Commands:
  char create <name> [key=value ...]  Create a character
  char update <name> <key=value ...>  Change the sheet
  char show <name>                    Show the sheet
  char delete <name>                  Remove a character
  chars                               List characters

Fields: health=<n>, money=<n>, attr.<name>=<text>,
  skill.<name>=<text>, equip.<item>=<count> (0 removes)"
                .to_string()),
            "monster" | "monsters" | "enc" | "encs" | "encounter" | "encounters" => Ok("\
Monster & Encounter Commands:
  monster create <name> [health]  Create a monster (default health 10)
  monster hp <name> <delta>       Damage (negative) or heal
  monster delete <name>           Remove a monster
  monsters                        List monsters
  enc create <name>               Create an encounter
  enc add <enc> <member>          Add a character or monster
  enc remove <enc> <member>       Remove a member
  enc show <name>                 Show the roster
  enc delete <name>               Remove an encounter
  encs                            List encounters"
                .to_string()),
            "store" | "buy" | "money" => Ok("\
Store & Money Commands:
  store                         List the store
  store add <item> <price>      Stock an item
  store remove <item>           Unstock an item
  buy <character> <item> [qty]  Buy (checks funds, adds equipment)
  money give <character> <n>    Hand out coins
  money take <character> <n>    Take coins (never below zero)"
                .to_string()),
            "journal" | "note" | "export" => Ok("\
Journal Commands:
  note <text>                   Add a journal note
  journal                       Show recent entries
  export [markdown|text]        Export the full journal"
                .to_string()),
            _ => Ok("\
Spielleiter Commands:
  deal [encounter]              Deal initiative
  card <participant>            Deal one extra card
  next / turn / order           Run the turn cycle
  hand / shuffle / deck / end   Deck bookkeeping
  roll <expr>                   Roll dice (3d6+2)
  token give|remove|clear       Status tokens
  tokens [participant]          Show tokens
  benny give|use                Benny economy
  bennies [participant]         Show benny balances
  char create|update|show|delete, chars
  monster create|hp|delete, monsters
  enc create|add|remove|show|delete, encs
  store [add|remove], buy, money give|take
  note <text>                   Add a journal note
  journal / export              Show or export the journal
  status                        Session overview
  help [topic]                  deal, roll, token, benny, char,
                                monster, store, journal
  quit                          Exit"
                .to_string()),
        }
    }
}

/// Multi-line character sheet.
fn format_character(c: &Character) -> String {
    let mut out = format!("{} (health {}, money {})", c.name, c.health, c.money);
    if !c.is_alive() {
        out.push_str(" [down]");
    }
    if !c.attributes.is_empty() {
        let parts: Vec<String> = c
            .attributes
            .iter()
            .map(|(name, value)| format!("{name} {value}"))
            .collect();
        out.push_str(&format!("\n  Attributes: {}", parts.join(", ")));
    }
    if !c.skills.is_empty() {
        let parts: Vec<String> = c
            .skills
            .iter()
            .map(|(name, value)| format!("{name} {value}"))
            .collect();
        out.push_str(&format!("\n  Skills: {}", parts.join(", ")));
    }
    if !c.equipment.is_empty() {
        let parts: Vec<String> = c
            .equipment
            .iter()
            .map(|(item, count)| format!("{item} x{count}"))
            .collect();
        out.push_str(&format!("\n  Equipment: {}", parts.join(", ")));
    }
    out
}
