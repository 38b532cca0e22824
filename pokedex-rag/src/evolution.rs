//! Evolution-chain rendering.
//!
//! An evolution chain arrives as a tree of species. [`EvolutionChain`] walks
//! it depth-first, children in source order, and produces one English
//! sentence per evolution edge:
//!
//! ```text
//! Ivysaur evolves into Venusaur via leveling up starting at level 16
//! ```
//!
//! Only the first detail entry of an edge is rendered. Edges without any
//! detail entry are alternate-form artifacts and are skipped together with
//! their subtree.

use crate::api::{ChainLink, EvolutionChainResponse, NamedResource, RawEvolutionDetail};
use crate::names::{clean_name, collapse_whitespace, title_case};

/// Rendered text for a chain whose root has no qualifying evolutions.
pub const NO_EVOLUTION: &str = "This Pokemon does not evolve.";

/// Rendered text when the chain could not be obtained at all.
pub const UNKNOWN_EVOLUTION: &str = "Unknown";

/// The primary mechanism of an evolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvolutionTrigger {
    LevelUp,
    Trade,
    UseItem,
    Shed,
    Other,
    /// Missing or unrecognized trigger.
    #[default]
    Unknown,
}

impl EvolutionTrigger {
    /// Parse a PokeAPI trigger name such as `level-up`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "level-up" => Self::LevelUp,
            "trade" => Self::Trade,
            "use-item" => Self::UseItem,
            "shed" => Self::Shed,
            "other" => Self::Other,
            _ => Self::Unknown,
        }
    }
}

/// Gender restriction on an evolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderRequirement {
    Female,
    Male,
}

impl GenderRequirement {
    /// PokeAPI encodes female as `1` and male as `2`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Female),
            2 => Some(Self::Male),
            _ => None,
        }
    }
}

/// Required relation between the Attack and Defense stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalStatsRelation {
    AttackGreater,
    DefenseGreater,
    Equal,
}

impl PhysicalStatsRelation {
    /// `1` is Attack > Defense, `-1` is Defense > Attack, `0` is equal.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::AttackGreater),
            -1 => Some(Self::DefenseGreater),
            0 => Some(Self::Equal),
            _ => None,
        }
    }
}

/// The conditions of a single species-to-species evolution.
///
/// Name fields hold the raw source identifiers; normalization happens when
/// rendering. Every `None` or `false` contributes nothing to the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvolutionDetail {
    pub trigger: EvolutionTrigger,
    pub min_level: Option<u32>,
    pub item: Option<String>,
    pub trade_species: Option<String>,
    pub time_of_day: Option<String>,
    pub held_item: Option<String>,
    pub min_happiness: Option<u32>,
    pub min_affection: Option<u32>,
    pub min_beauty: Option<u32>,
    pub location: Option<String>,
    pub known_move: Option<String>,
    pub known_move_type: Option<String>,
    pub gender: Option<GenderRequirement>,
    pub needs_overworld_rain: bool,
    pub turn_upside_down: bool,
    pub party_species: Option<String>,
    pub party_type: Option<String>,
    pub relative_physical_stats: Option<PhysicalStatsRelation>,
}

impl EvolutionDetail {
    /// A detail with only a trigger set.
    pub fn new(trigger: EvolutionTrigger) -> Self {
        Self { trigger, ..Self::default() }
    }

    /// Auxiliary clauses in rendering order.
    fn auxiliary_clauses(&self) -> Vec<String> {
        let mut clauses = Vec::new();

        if let Some(time) = &self.time_of_day {
            clauses.push(format!("during the {time}"));
        }
        if let Some(item) = &self.held_item {
            clauses.push(format!("while holding {}", clean_name(Some(item))));
        }
        if self.min_happiness.is_some() {
            clauses.push("with high friendship".to_string());
        }
        if self.min_affection.is_some() {
            clauses.push("with high affection".to_string());
        }
        if self.min_beauty.is_some() {
            clauses.push("with high beauty".to_string());
        }
        if let Some(location) = &self.location {
            clauses.push(format!("at {}", clean_name(Some(location))));
        }
        if let Some(known_move) = &self.known_move {
            clauses.push(format!("knowing the move {}", clean_name(Some(known_move))));
        }
        if let Some(move_type) = &self.known_move_type {
            clauses.push(format!("knowing a {} type move", clean_name(Some(move_type))));
        }
        match self.gender {
            Some(GenderRequirement::Female) => clauses.push("(female only)".to_string()),
            Some(GenderRequirement::Male) => clauses.push("(male only)".to_string()),
            None => {}
        }
        if self.needs_overworld_rain {
            clauses.push("while raining".to_string());
        }
        if self.turn_upside_down {
            clauses.push("while holding the console upside down".to_string());
        }
        if let Some(species) = &self.party_species {
            clauses.push(format!("with {} in party", clean_name(Some(species))));
        }
        if let Some(party_type) = &self.party_type {
            clauses.push(format!("with a {} type in party", clean_name(Some(party_type))));
        }
        match self.relative_physical_stats {
            Some(PhysicalStatsRelation::AttackGreater) => {
                clauses.push("if Attack > Defense".to_string())
            }
            Some(PhysicalStatsRelation::DefenseGreater) => {
                clauses.push("if Defense > Attack".to_string())
            }
            Some(PhysicalStatsRelation::Equal) => clauses.push("if Attack = Defense".to_string()),
            None => {}
        }

        clauses
    }
}

fn present_name(resource: Option<&NamedResource>) -> Option<String> {
    resource.map(|r| r.name.clone()).filter(|name| !name.is_empty())
}

fn present_count(value: Option<i64>) -> Option<u32> {
    value.filter(|v| *v > 0).and_then(|v| u32::try_from(v).ok())
}

impl From<&RawEvolutionDetail> for EvolutionDetail {
    fn from(raw: &RawEvolutionDetail) -> Self {
        Self {
            trigger: raw
                .trigger
                .as_ref()
                .map(|t| EvolutionTrigger::from_name(&t.name))
                .unwrap_or_default(),
            min_level: present_count(raw.min_level),
            item: present_name(raw.item.as_ref()),
            trade_species: present_name(raw.trade_species.as_ref()),
            time_of_day: raw.time_of_day.clone().filter(|t| !t.is_empty()),
            held_item: present_name(raw.held_item.as_ref()),
            min_happiness: present_count(raw.min_happiness),
            min_affection: present_count(raw.min_affection),
            min_beauty: present_count(raw.min_beauty),
            location: present_name(raw.location.as_ref()),
            known_move: present_name(raw.known_move.as_ref()),
            known_move_type: present_name(raw.known_move_type.as_ref()),
            gender: raw.gender.and_then(GenderRequirement::from_code),
            needs_overworld_rain: raw.needs_overworld_rain.unwrap_or(false),
            turn_upside_down: raw.turn_upside_down.unwrap_or(false),
            party_species: present_name(raw.party_species.as_ref()),
            party_type: present_name(raw.party_type.as_ref()),
            relative_physical_stats: raw
                .relative_physical_stats
                .and_then(PhysicalStatsRelation::from_code),
        }
    }
}

/// One species in an evolution tree.
///
/// `details` describe the edge from the parent into this node and are
/// ignored on the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvolutionNode {
    pub species: String,
    pub details: Vec<EvolutionDetail>,
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    /// A node with no details and no children.
    pub fn new(species: impl Into<String>) -> Self {
        Self { species: species.into(), details: Vec::new(), evolves_to: Vec::new() }
    }

    /// Append a detail for the edge into this node.
    pub fn with_detail(mut self, detail: EvolutionDetail) -> Self {
        self.details.push(detail);
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: EvolutionNode) -> Self {
        self.evolves_to.push(child);
        self
    }

    /// True when this species does not evolve further.
    pub fn is_terminal(&self) -> bool {
        self.evolves_to.is_empty()
    }
}

impl From<&ChainLink> for EvolutionNode {
    fn from(link: &ChainLink) -> Self {
        Self {
            species: link.species.name.clone(),
            details: link.evolution_details.iter().map(EvolutionDetail::from).collect(),
            evolves_to: link.evolves_to.iter().map(EvolutionNode::from).collect(),
        }
    }
}

/// A rendered evolution tree.
///
/// Built once from its root; the sentences are computed up front and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionChain {
    root: EvolutionNode,
    sentences: Vec<String>,
}

impl EvolutionChain {
    /// Render the tree rooted at `root`.
    pub fn new(root: EvolutionNode) -> Self {
        let mut sentences = Vec::new();
        collect_sentences(&root, &mut sentences);
        Self { root, sentences }
    }

    /// Render a decoded `/evolution-chain/{id}` document.
    pub fn from_response(response: &EvolutionChainResponse) -> Self {
        Self::new(EvolutionNode::from(&response.chain))
    }

    pub fn root(&self) -> &EvolutionNode {
        &self.root
    }

    /// One sentence per rendered edge, in pre-order, without trailing period.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// The full description, or [`NO_EVOLUTION`] when nothing was rendered.
    pub fn text(&self) -> String {
        if self.sentences.is_empty() {
            NO_EVOLUTION.to_string()
        } else {
            format!("{}.", self.sentences.join(". "))
        }
    }
}

fn species_label(name: &str) -> String {
    title_case(&clean_name(Some(name)))
}

fn collect_sentences(node: &EvolutionNode, out: &mut Vec<String>) {
    let parent = species_label(&node.species);
    for child in &node.evolves_to {
        let Some(detail) = child.details.first() else {
            continue;
        };
        out.push(format!(
            "{parent} evolves into {} via {}",
            species_label(&child.species),
            describe_detail(detail)
        ));
        collect_sentences(child, out);
    }
}

/// The "via ..." part of a sentence: base action followed by every present
/// condition, whitespace collapsed.
pub fn describe_detail(detail: &EvolutionDetail) -> String {
    let mut clauses = Vec::new();

    let base_action = match detail.trigger {
        EvolutionTrigger::LevelUp => {
            if let Some(level) = detail.min_level {
                clauses.push(format!("starting at level {level}"));
            }
            "leveling up".to_string()
        }
        EvolutionTrigger::Trade => {
            if let Some(species) = &detail.trade_species {
                clauses.push(format!("with {}", clean_name(Some(species))));
            }
            "trading".to_string()
        }
        EvolutionTrigger::UseItem => match &detail.item {
            Some(item) => format!("using {}", clean_name(Some(item))),
            None => "using unknown item".to_string(),
        },
        EvolutionTrigger::Shed => "shedding shell (needs space in party)".to_string(),
        EvolutionTrigger::Other => "special condition".to_string(),
        EvolutionTrigger::Unknown => "evolving".to_string(),
    };

    clauses.extend(detail.auxiliary_clauses());
    collapse_whitespace(&format!("{base_action} {}", clauses.join(" ")))
}

/// Describe a chain that may have failed to load.
pub fn describe_evolution(root: Option<&EvolutionNode>) -> String {
    match root {
        Some(root) => EvolutionChain::new(root.clone()).text(),
        None => UNKNOWN_EVOLUTION.to_string(),
    }
}
