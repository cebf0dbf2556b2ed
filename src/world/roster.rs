//! Starting strongholds for each race

use crate::core::error::Result;
use crate::core::types::Race;
use crate::entity::stronghold::Stronghold;
use crate::world::environment::require_environment;

/// (stronghold name, environment name)
pub type RosterEntry = (&'static str, &'static str);

pub static HUMAN_ROSTER: [RosterEntry; 20] = [
    ("Aurora Keep", "Plains"),
    ("Brighton Hold", "Forest"),
    ("Casterly Fort", "Mountain"),
    ("Dawn Bastion", "Forest"),
    ("Eagle Watch", "Mountain"),
    ("Falcon Reach", "Plains"),
    ("Gale Ridge", "Ruins"),
    ("Harbor Gate", "River"),
    ("Iron Guard", "Mountain"),
    ("Jade Fortress", "Forest"),
    ("Kingswatch", "Plains"),
    ("Lion's Den", "Desert"),
    ("Moonlit Spire", "Ice"),
    ("Northwatch", "Mountain"),
    ("Oakheart Hold", "Forest"),
    ("Pike's Edge", "Plains"),
    ("Queensrest", "Forest"),
    ("Riverside Citadel", "River"),
    ("Sunfire Keep", "Desert"),
    ("Tranquil Post", "Swamp"),
];

pub static ORC_ROSTER: [RosterEntry; 20] = [
    ("Ashen Camp", "Volcano"),
    ("Bloodfang Den", "Cave"),
    ("Crimson Hold", "Swamp"),
    ("Darkmaul Outpost", "Swamp"),
    ("Ember Rock", "Volcano"),
    ("Frostbite Lair", "Ice"),
    ("Gorefield Fort", "Ruins"),
    ("Hellscream Barracks", "Volcano"),
    ("Ironmaw Stronghold", "Mountain"),
    ("Jagged Ridge", "Mountain"),
    ("Krul Camp", "Desert"),
    ("Lava Pit Base", "Volcano"),
    ("Mangrove Den", "Swamp"),
    ("Nightstalker Hideout", "Cave"),
    ("Orc Haven", "Plains"),
    ("Pitfall Hold", "Ruins"),
    ("Quake Ruins", "Ruins"),
    ("Ragefire Hold", "Volcano"),
    ("Skullcrusher Fort", "Cave"),
    ("Thornwood Camp", "Forest"),
];

pub fn roster(race: Race) -> &'static [RosterEntry] {
    match race {
        Race::Human => &HUMAN_ROSTER,
        Race::Orc => &ORC_ROSTER,
    }
}

/// Build fresh, full-health strongholds in roster order
pub fn build_strongholds(race: Race) -> Result<Vec<Stronghold>> {
    roster(race)
        .iter()
        .map(|&(name, env_name)| Ok(Stronghold::new(name, require_environment(env_name)?)))
        .collect()
}
