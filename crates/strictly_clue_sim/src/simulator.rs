//! Random full games driven through the deduction engine.
//!
//! A [`Deal`] holds the ground truth. A [`Simulation`] plays random
//! accusations against it, answers them the way real players would, and
//! feeds each resulting turn to the engine exactly as a human user would
//! type it in. The engine never sees the deal.

use crate::config::{ConfigError, SimConfig};
use crate::report::{GameOutcome, GameRecord, SimulationReport};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use strictly_clue::{
    Accusation, Category, DeductionError, HandId, ItemId, Owner, Participant, SetupError, Table,
    TableSetup, Turn, Universe, apply_turn, process_turns, validate,
};
use tracing::{debug, info, instrument, warn};

/// Errors raised while simulating.
#[derive(Debug, Clone, derive_more::Display)]
pub enum SimError {
    /// The configuration cannot be played.
    #[display("{}", _0)]
    Config(ConfigError),

    /// The dealt table could not be set up.
    #[display("Setup failed: {}", _0)]
    Setup(SetupError),

    /// The engine rejected a turn or failed to settle.
    #[display("Deduction failed: {}", _0)]
    Deduction(DeductionError),

    /// A truthful turn contradicted what the engine believed.
    #[display("Guess {} contradicts the table: {}", guess, warnings)]
    RejectedTurn {
        /// One-based guess number.
        guess: usize,
        /// Validator warnings, joined.
        warnings: String,
    },
}

impl std::error::Error for SimError {}

impl From<ConfigError> for SimError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<SetupError> for SimError {
    fn from(error: SetupError) -> Self {
        Self::Setup(error)
    }
}

impl From<DeductionError> for SimError {
    fn from(error: DeductionError) -> Self {
        Self::Deduction(error)
    }
}

/// Name of a seat in simulated games. Seat 0 is always the self seat.
pub fn seat_name(index: usize) -> String {
    if index == 0 {
        "You".to_string()
    } else {
        format!("Player{}", index)
    }
}

/// The real cards of one game.
#[derive(Debug, Clone, Getters)]
pub struct Deal {
    /// Card universe.
    universe: Universe,
    /// The hidden solution, one card per category.
    solution: Participant,
    /// Every seat's cards in turn order.
    seats: Vec<Participant>,
}

impl Deal {
    /// Shuffles the universe and deals it.
    ///
    /// The first card of each category in shuffled order becomes the
    /// solution; the rest go round-robin starting at seat 0.
    #[instrument(skip(universe, rng))]
    pub fn shuffle<R: Rng>(universe: &Universe, players: usize, rng: &mut R) -> Self {
        let mut deck: Vec<ItemId> = universe.ids().collect();
        deck.shuffle(rng);

        let mut solution = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            if let Some(position) = deck
                .iter()
                .position(|item| universe.category(*item) == Ok(category))
            {
                solution.push(deck.remove(position));
            }
        }

        let players = players.max(1);
        let mut hands = vec![Vec::new(); players];
        for (index, item) in deck.into_iter().enumerate() {
            hands[index % players].push(item);
        }
        let seats = hands
            .into_iter()
            .enumerate()
            .map(|(index, held)| {
                Participant::new(seat_name(index), Owner::Seat(HandId::new(index)), held)
            })
            .collect();

        Self {
            universe: universe.clone(),
            solution: Participant::new("Solution", Owner::Solution, solution),
            seats,
        }
    }

    /// The real solution card of a category.
    pub fn solution_card(&self, category: Category) -> Option<ItemId> {
        self.solution
            .held()
            .iter()
            .copied()
            .find(|item| self.universe.category(*item) == Ok(category))
    }

    /// Who answers an accusation, and with which card.
    ///
    /// Asks each seat after the accuser in turn order; the first one
    /// holding any guessed card shows the first of them it holds.
    pub fn answer(&self, accuser: HandId, items: &[ItemId]) -> Option<(HandId, ItemId)> {
        let count = self.seats.len();
        (1..count)
            .map(|offset| (accuser.index() + offset) % count)
            .find_map(|index| {
                self.seats[index]
                    .show(items)
                    .map(|item| (HandId::new(index), item))
            })
    }
}

/// One game in progress.
#[derive(Debug, Clone, Getters)]
pub struct Simulation {
    /// Ground truth.
    deal: Deal,
    /// What the engine believes.
    table: Table,
    /// Every turn so far.
    log: Vec<Turn>,
    /// Guesses made so far.
    guesses: usize,
}

impl Simulation {
    /// Deals a game and seats it.
    #[instrument(skip(universe, rng))]
    pub fn new<R: Rng>(universe: Universe, players: usize, rng: &mut R) -> Result<Self, SimError> {
        let deal = Deal::shuffle(&universe, players, rng);

        let mut setup = TableSetup::new(universe);
        for (index, seat) in deal.seats.iter().enumerate() {
            setup = if index == 0 {
                setup.with_self(seat.name().clone(), seat.held().iter().copied())
            } else {
                setup.with_opponent(seat.name().clone(), seat.held().len())
            };
        }
        let mut table = setup.build()?;
        process_turns(&mut table, &[])?;

        Ok(Self {
            deal,
            table,
            log: Vec::new(),
            guesses: 0,
        })
    }

    /// Plays one random accusation. Returns true once the case is solved.
    ///
    /// # Errors
    ///
    /// Fails if the truthful turn contradicts the engine's beliefs, or if the
    /// engine itself fails.
    #[instrument(skip(self, rng), fields(guess = self.guesses + 1))]
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<bool, SimError> {
        let universe = self.table.universe().clone();
        let accuser = HandId::new(rng.gen_range(0..self.table.seat_count()));
        let person = pick(&universe, Category::Person, rng)?;
        let weapon = pick(&universe, Category::Weapon, rng)?;
        let room = pick(&universe, Category::Room, rng)?;
        let accusation = Accusation::new(&universe, person, weapon, room)?;

        let answer = self.deal.answer(accuser, &accusation.items());
        let revealer = answer.map(|(seat, _)| seat);
        let disclosed = answer
            .filter(|_| accuser.index() == 0)
            .map(|(_, item)| item);
        let turn = Turn::new(accusation, accuser, revealer, disclosed);

        let validation = validate(&turn, &self.table)?;
        if !validation.is_valid() {
            let warnings = validation.warnings(&self.table).join("; ");
            warn!(%warnings, "Truthful turn rejected");
            return Err(SimError::RejectedTurn {
                guess: self.guesses + 1,
                warnings,
            });
        }

        apply_turn(&mut self.table, &turn)?;
        self.log.push(turn);
        let passes = process_turns(&mut self.table, &self.log)?;
        self.guesses += 1;

        debug!(
            turn = %self.describe(&turn),
            passes,
            unknown = self.table.unknown_count(),
            "Guess processed"
        );
        Ok(self.table.is_solved())
    }

    /// Plays until solved or out of guesses.
    pub fn run<R: Rng>(&mut self, max_guesses: usize, rng: &mut R) -> Result<GameOutcome, SimError> {
        while !self.table.is_solved() && self.guesses < max_guesses {
            self.step(rng)?;
        }
        Ok(self.outcome())
    }

    /// Compares the deduced solution with the real one.
    pub fn outcome(&self) -> GameOutcome {
        if !self.table.is_solved() {
            return GameOutcome::MaxGuessesReached;
        }
        let solution = self.table.solution();
        for (category, wrong) in [
            (Category::Person, GameOutcome::PersonWrong),
            (Category::Weapon, GameOutcome::WeaponWrong),
            (Category::Room, GameOutcome::RoomWrong),
        ] {
            if solution.slot(category) != self.deal.solution_card(category) {
                return wrong;
            }
        }
        GameOutcome::Success
    }

    /// One line describing a turn.
    pub fn describe(&self, turn: &Turn) -> String {
        let universe = self.table.universe();
        let name = |seat: HandId| {
            self.table
                .hand(seat)
                .map(|hand| hand.name().to_string())
                .unwrap_or_else(|_| seat.to_string())
        };
        let [person, weapon, room] = turn.items().map(|item| universe.name(item));
        let answer = match (turn.revealer(), turn.disclosed()) {
            (Some(revealer), Some(card)) => {
                format!("{} showed {}", name(revealer), universe.name(card))
            }
            (Some(revealer), None) => format!("{} showed a card", name(revealer)),
            (None, _) => "nobody could answer".to_string(),
        };
        format!(
            "{} suggested {}, {}, {}; {}",
            name(turn.accuser()),
            person,
            weapon,
            room,
            answer
        )
    }

    /// Summarizes the game.
    pub fn record(&self, seed: u64) -> GameRecord {
        let solution = Category::ALL.map(|category| {
            self.deal
                .solution_card(category)
                .map(|item| self.table.universe().name(item))
                .unwrap_or_default()
        });
        let log = self.log.iter().map(|turn| self.describe(turn)).collect();
        GameRecord::new(seed, self.outcome(), self.guesses, solution, log)
    }
}

fn pick<R: Rng>(universe: &Universe, category: Category, rng: &mut R) -> Result<ItemId, SimError> {
    let items: Vec<ItemId> = universe.of_category(category).map(|item| item.id()).collect();
    items.choose(rng).copied().ok_or_else(|| {
        SimError::Config(ConfigError::new(format!(
            "The universe has no {} cards",
            category
        )))
    })
}

/// Plays one seeded game over the standard universe.
#[instrument]
pub fn play_game(players: usize, max_guesses: usize, seed: u64) -> Result<GameRecord, SimError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut simulation = Simulation::new(Universe::standard(), players, &mut rng)?;
    simulation.run(max_guesses, &mut rng)?;
    Ok(simulation.record(seed))
}

/// Plays every game in the configuration and collects the report.
#[instrument(skip(config), fields(games = config.games(), players = config.players()))]
pub fn run_games(config: &SimConfig) -> Result<SimulationReport, SimError> {
    config.check(Universe::standard().len())?;

    let mut report = SimulationReport::new();
    for game in 0..*config.games() {
        let seed = config
            .seed()
            .map(|base| base.wrapping_add(game as u64))
            .unwrap_or_else(rand::random);
        let record = play_game(*config.players(), *config.max_guesses(), seed)?;
        info!(
            game,
            seed,
            outcome = %record.outcome(),
            guesses = record.guesses(),
            "Game finished"
        );
        report.record(record);
    }
    Ok(report)
}
