use std::fmt;

use regimen_ui_tree::{Node, NodeId, TreePayload};
use serde::{Deserialize, Serialize};

/// Default repetitions for a new exercise.
pub const DEFAULT_REPS: u32 = 8;
/// Default calories for a new exercise.
pub const DEFAULT_CALORIES: u32 = 10;
/// Default distance for a new exercise.
pub const DEFAULT_DISTANCE: u32 = 20;
/// Default distance unit for a new exercise.
pub const DEFAULT_METRIC: &str = "meters";
/// Default number of rounds for a new repeat.
pub const DEFAULT_ROUNDS: u32 = 3;
/// Default duration for a new timed repeat or EMOM interval.
pub const DEFAULT_TIME: u32 = 60;
/// Default duration of a new rest, in seconds.
pub const DEFAULT_REST: u32 = 60;

/// Program item: a tree node carrying workout data.
pub type Item = Node<WorkoutData>;

/// Content of a single program item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum WorkoutData {
    Rest { duration: u32 },
    Exercise { exercise: String, scoring: Scoring },
    Repeat { repeat: Repeat },
}

impl TreePayload for WorkoutData {
    fn supports_children(&self) -> bool {
        matches!(self, WorkoutData::Repeat { .. })
    }
}

impl fmt::Display for WorkoutData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutData::Rest { duration } => {
                write!(f, "Rest for {duration} seconds")
            },
            WorkoutData::Exercise { exercise, scoring } => {
                write!(f, "{exercise} for {scoring}")
            },
            WorkoutData::Repeat { repeat } => write!(f, "Repeat {repeat}"),
        }
    }
}

/// How an exercise is measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Scoring {
    Reps { reps: u32 },
    Calories { calories: u32 },
    Distance { distance: u32, metric: String },
}

impl Default for Scoring {
    fn default() -> Self {
        ScoringKind::Reps.default_scoring()
    }
}

impl fmt::Display for Scoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scoring::Reps { reps } => write!(f, "{reps} reps"),
            Scoring::Calories { calories } => write!(f, "{calories} calories"),
            Scoring::Distance { distance, metric } => {
                write!(f, "{distance} {metric}")
            },
        }
    }
}

/// How a repeat cycles through its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Repeat {
    Rounds { rounds: u32 },
    Time { time: u32 },
    Emom { time: u32, rounds: u32 },
}

impl Default for Repeat {
    fn default() -> Self {
        RepeatKind::Rounds.default_repeat()
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repeat::Rounds { rounds } => write!(f, "for {rounds} rounds"),
            Repeat::Time { time } => write!(f, "for {time} minutes"),
            Repeat::Emom { time, rounds } => {
                write!(f, "every {time} seconds for {rounds} rounds")
            },
        }
    }
}

/// Item type selector offered when adding an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Rest,
    Exercise,
    Repeat,
}

impl ItemKind {
    /// Return the pre-filled content for a new item of this kind.
    pub fn draft(self) -> WorkoutData {
        match self {
            ItemKind::Rest => WorkoutData::Rest {
                duration: DEFAULT_REST,
            },
            ItemKind::Exercise => WorkoutData::Exercise {
                exercise: String::new(),
                scoring: Scoring::default(),
            },
            ItemKind::Repeat => WorkoutData::Repeat {
                repeat: Repeat::default(),
            },
        }
    }
}

/// Scoring type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringKind {
    Reps,
    Calories,
    Distance,
}

impl ScoringKind {
    pub fn default_scoring(self) -> Scoring {
        match self {
            ScoringKind::Reps => Scoring::Reps { reps: DEFAULT_REPS },
            ScoringKind::Calories => Scoring::Calories {
                calories: DEFAULT_CALORIES,
            },
            ScoringKind::Distance => Scoring::Distance {
                distance: DEFAULT_DISTANCE,
                metric: String::from(DEFAULT_METRIC),
            },
        }
    }
}

/// Repeat type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatKind {
    Rounds,
    Time,
    Emom,
}

impl RepeatKind {
    pub fn default_repeat(self) -> Repeat {
        match self {
            RepeatKind::Rounds => Repeat::Rounds {
                rounds: DEFAULT_ROUNDS,
            },
            RepeatKind::Time => Repeat::Time { time: DEFAULT_TIME },
            RepeatKind::Emom => Repeat::Emom {
                time: DEFAULT_TIME,
                rounds: DEFAULT_ROUNDS,
            },
        }
    }
}

/// Named section of a program owning its own item tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub(super) id: String,
    pub(super) name: String,
    #[serde(default)]
    pub(super) items: Vec<Item>,
}

impl Block {
    /// Create a block with the given items.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-level items of the block.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

/// Ordered list of blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub(super) blocks: Vec<Block>,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            blocks: vec![Block::new("block-a", "Block A", Vec::new())],
        }
    }
}

impl Program {
    /// Create a program from its blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Starter program: a three-round squat repeat, bench press, a rest and
    /// deadlifts.
    pub fn sample() -> Self {
        let exercise = |name: &str, reps| WorkoutData::Exercise {
            exercise: String::from(name),
            scoring: Scoring::Reps { reps },
        };

        let items = vec![
            Node::container(
                "item1",
                WorkoutData::Repeat {
                    repeat: Repeat::Rounds { rounds: 3 },
                },
                vec![Node::new("item1.1", exercise("Back Squat", 5))],
            ),
            Node::new("item2", exercise("Bench Press", 5)),
            Node::new("item3", WorkoutData::Rest { duration: 60 }),
            Node::new("item4", exercise("Deadlift", 5)),
        ];

        Self {
            blocks: vec![Block::new("block-a", "Block A", items)],
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Return the block with the given id.
    pub fn block(&self, block_id: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == block_id)
    }

    pub(super) fn block_mut(&mut self, block_id: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|block| block.id == block_id)
    }
}

/// Presentation data for one visible row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowViewModel {
    pub id: NodeId,
    pub depth: usize,
    /// Left indentation in pixels.
    pub indent: f32,
    pub label: String,
    /// Whether the row owns children that can be hidden.
    pub collapsible: bool,
    pub collapsed: bool,
    /// Whether the row is the one being dragged.
    pub is_active: bool,
}
