//! The closed set of known uniques.
//!
//! Each entry is declared once, with its template text, the content it may
//! appear on, and optionally a superseding entry and a manual list of
//! argument kinds per slot. The `unique_types!` macro expands the
//! declarations into the [`UniqueType`] enum and its constant accessors.

use std::fmt;
use std::str::FromStr;

use uniques_foundation::{Error, Result};

use crate::param::ArgumentKind;
use crate::template::{Catalog, Template};

/// Where a unique may be written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UniqueTarget {
    /// Nation-wide effects (nations, policies, beliefs, global uniques).
    Global,
    /// Unit types and promotions.
    Unit,
    /// Buildings and wonders.
    Building,
    /// Tile improvements.
    Improvement,
    /// Terrains and features.
    Terrain,
    /// Resources.
    Resource,
    /// Modifiers written in `<...>` after another unique.
    Conditional,
}

/// Declares the catalog.
///
/// ```text
/// Name => "template text" @ [Target, ...] (superseded_by Other)? (kinds [[Kind, ...], ...])?;
/// ```
macro_rules! unique_types {
    (@superseded) => { None };
    (@superseded $sup:ident) => { Some(UniqueType::$sup) };

    (@kinds) => { None };
    (@kinds $([$($kind:ident),+]),+) => {{
        const KINDS: &[&[ArgumentKind]] = &[$(&[$(ArgumentKind::$kind),+]),+];
        Some(KINDS)
    }};

    (
        $(
            $(#[$meta:meta])*
            $name:ident => $text:literal @ [$($target:ident),* $(,)?]
            $(superseded_by $sup:ident)?
            $(kinds [$([$($kind:ident),+ $(,)?]),+ $(,)?])?
            ;
        )*
    ) => {
        /// Identifies one catalog entry independently of its text.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum UniqueType {
            $(
                $(#[$meta])*
                $name,
            )*
        }

        impl UniqueType {
            /// Every entry, in declaration order.
            pub const ALL: &'static [UniqueType] = &[$(UniqueType::$name),*];

            /// The entry's stable name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(UniqueType::$name => stringify!($name),)*
                }
            }

            /// The authored template text.
            #[must_use]
            pub const fn text(self) -> &'static str {
                match self {
                    $(UniqueType::$name => $text,)*
                }
            }

            /// Content this unique may appear on.
            #[must_use]
            pub const fn targets(self) -> &'static [UniqueTarget] {
                match self {
                    $(UniqueType::$name => &[$(UniqueTarget::$target),*],)*
                }
            }

            /// The entry that replaces this one, if it is deprecated.
            #[must_use]
            pub const fn superseded_by(self) -> Option<UniqueType> {
                match self {
                    $(UniqueType::$name => unique_types!(@superseded $($sup)?),)*
                }
            }

            /// Manually declared argument kinds, one set per slot.
            #[must_use]
            pub const fn kind_overrides(self) -> Option<&'static [&'static [ArgumentKind]]> {
                match self {
                    $(UniqueType::$name => unique_types!(@kinds $($([$($kind),+]),+)?),)*
                }
            }
        }
    };
}

unique_types! {
    // =========================================================================
    // Yields
    // =========================================================================

    /// Flat yield.
    Stats => "[stats]" @ [Global, Building, Improvement, Terrain, Resource];
    /// Flat yield in each matching city.
    StatsPerCity => "[stats] [cityFilter]" @ [Global];
    /// Yield added to every matching building.
    StatsFromBuildings => "[stats] from every [buildingFilter]" @ [Global, Building];
    /// Yield added to matching tiles of matching cities.
    StatsFromTiles => "[stats] from [terrainFilter] tiles [cityFilter]" @ [Global, Building];
    /// Yield an improvement gains once a technology is known.
    StatsOnceTechDiscovered => "[stats] once [tech] is discovered" @ [Improvement];
    /// Percentage bonus to one stat.
    StatPercentBonus => "[relativeAmount]% [stat]" @ [Global, Building];
    /// Percentage bonus to one stat in matching cities.
    StatPercentBonusCities => "[relativeAmount]% [stat] [cityFilter]" @ [Global];
    /// Percentage bonus to a resource's output.
    ResourceProductionBonus => "[relativeAmount]% [resource] resource production" @ [Global];
    /// Food kept after a city grows.
    CarryOverFood =>
        "[relativeAmount]% Food is carried over after population increases [cityFilter]"
        @ [Global, Building];
    /// Surplus food turned into production.
    ConvertFoodToProduction =>
        "Converts [fraction] of surplus Food into Production [cityFilter]"
        @ [Global, Building];

    // =========================================================================
    // Costs and maintenance
    // =========================================================================

    /// Reduced upkeep for matching units.
    UnitMaintenanceDiscount =>
        "[amount]% maintenance costs for [mapUnitFilter] units"
        @ [Global, Unit];
    /// A number of units with no upkeep.
    FreeUnitMaintenance => "[amount] units cost no maintenance" @ [Global];
    /// Production cost change for matching buildings.
    BuildingCostPercent =>
        "[relativeAmount]% Production when constructing [buildingFilter] buildings [cityFilter]"
        @ [Global];

    // =========================================================================
    // Grants and prerequisites
    // =========================================================================

    /// A building granted for free.
    FreeBuilding => "Gain a free [building] [cityFilter]" @ [Global, Building];
    /// A unit granted for free.
    FreeUnit => "Free [unit] appears" @ [Global, Building];
    /// Resources supplied.
    ProvidesResources => "Provides [amount] [resource]" @ [Building, Improvement];
    /// Resources used up.
    ConsumesResources => "Consumes [amount] [resource]" @ [Building, Unit, Improvement];
    /// Price in either a stat or a stockpiled resource.
    CostsCurrency => "Costs [amount] [currency]" @ [Building, Unit]
        kinds [[Number], [StatName, ResourceName]];
    /// A building every city must have first.
    RequiresBuildingInAllCities => "Requires a [building] in all cities" @ [Building];
    /// A prerequisite that may be a technology, a building or a policy.
    RequiresPrerequisite => "Requires [prerequisite]" @ [Building, Unit]
        kinds [[TechName, BuildingName, PolicyName]];
    /// Becomes obsolete with a technology.
    ObsoleteWith => "Obsolete with [tech]" @ [Building, Unit, Improvement];
    /// Unavailable before an era.
    AvailableFromEra => "Available starting in the [era]" @ [Building, Unit];
    /// A promotion given to matching units.
    GainPromotion => "[mapUnitFilter] units gain the [promotion] promotion" @ [Global];
    /// Upgrade path to a unit or any unit of a type.
    UpgradesTo => "Can upgrade to [unit] or [unitType]" @ [Unit]
        kinds [[UnitName], [UnitTypeName, UnitName]];

    // =========================================================================
    // Units
    // =========================================================================

    /// Combat strength change.
    Strength => "[relativeAmount]% Strength" @ [Global, Unit];
    /// Older spelling with the sign outside the slot.
    StrengthWithPlus => "+[amount]% Strength" @ [Global, Unit] superseded_by Strength;
    /// Movement point change.
    Movement => "[amount] Movement" @ [Unit, Global];
    /// Older spelling that hard-coded the sign.
    MovementBonus => "+[amount] Movement" @ [Unit] superseded_by Movement;
    /// Sight range change.
    Sight => "[amount] Sight" @ [Unit, Global];
    /// Healing for neighbouring units.
    HealAdjacentUnits => "All adjacent units heal [amount] HP when healing" @ [Unit];
    /// An improvement the unit can build.
    CanConstruct => "Can construct [improvement]" @ [Unit];
    /// Extra movement cost for enemies in friendly territory.
    EnemyUnitsSpendMovement =>
        "Enemy [mapUnitFilter] units must spend [amount] extra movement points when inside your territory"
        @ [Global];

    // =========================================================================
    // Meta
    // =========================================================================

    /// Free text for mod authors, never interpreted.
    Comment => "Comment [comment]" @ [Global, Unit, Building, Improvement, Terrain, Resource];

    // =========================================================================
    // Conditionals
    // =========================================================================

    /// While attacking.
    ConditionalWhenAttacking => "when attacking" @ [Conditional];
    /// While defending.
    ConditionalWhenDefending => "when defending" @ [Conditional];
    /// While at war with anyone.
    ConditionalAtWar => "when at war" @ [Conditional];
    /// Against matching units.
    ConditionalVsUnits => "vs [mapUnitFilter] units" @ [Conditional];
    /// While a resource is available.
    ConditionalWithResource => "with [resource]" @ [Conditional];
    /// With a random chance.
    ConditionalChance => "with [amount]% chance" @ [Conditional];
    /// Once a technology is known.
    ConditionalAfterTech => "after discovering [tech]" @ [Conditional];
    /// Until a technology is known.
    ConditionalBeforeTech => "before discovering [tech]" @ [Conditional];
    /// On matching tiles.
    ConditionalInTiles => "in [terrainFilter] tiles" @ [Conditional];
    /// In cities of at least a given size.
    ConditionalCityPopulation =>
        "in cities with at least [amount] [populationFilter]"
        @ [Conditional];
}

impl UniqueType {
    /// Returns this entry's catalog record.
    #[must_use]
    pub fn template(self) -> &'static Template {
        Catalog::global().get(self)
    }

    /// Returns true if this entry is only valid inside `<...>`.
    #[must_use]
    pub fn is_conditional(self) -> bool {
        self.targets().contains(&UniqueTarget::Conditional)
    }

    /// Returns true if this entry has a replacement.
    #[must_use]
    pub const fn is_deprecated(self) -> bool {
        self.superseded_by().is_some()
    }
}

impl FromStr for UniqueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Catalog::global()
            .lookup_by_kind_name(s)
            .map(Template::unique_type)
            .ok_or_else(|| Error::unknown_unique_type(s))
    }
}

impl fmt::Display for UniqueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
