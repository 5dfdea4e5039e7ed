//! Category labels for the lowest-priority result tier, plus the ASCII
//! icon tags hosts can render next to rows.

use crate::types::Page;

/// Key prefixes for page families that carry no category hints.
const KEY_PREFIX_CATEGORIES: &[(&str, &str)] = &[
	("LogicSlotType", "Logic Slot Variables"),
	("LogicType", "Logic Variables"),
	("Gas", "Gases"),
	("Reagent", "Reagents"),
	("Gene", "Genetics"),
];

/// Fallback label when nothing else applies.
pub const OTHER_CATEGORY: &str = "Other";

/// Resolves the category label used to group a page in the lowest tier.
///
/// The page's own first hint wins; otherwise the key prefix table;
/// otherwise [`OTHER_CATEGORY`].
#[must_use]
pub fn category_for_page(page: &Page) -> String {
	if let Some(hint) = page.category_hints.first()
		&& !hint.is_empty()
	{
		return hint.clone();
	}

	for (prefix, label) in KEY_PREFIX_CATEGORIES {
		if page.key.starts_with(prefix) {
			return (*label).to_string();
		}
	}

	OTHER_CATEGORY.to_string()
}

/// Exact category-name to icon-tag mapping. Pure ASCII for maximum font
/// compatibility.
const CATEGORY_ICONS: &[(&str, &str)] = &[
	("AtmosDevices", "[A]"),
	("PipesCategory", "[P]"),
	("GasCanisterCategory", "[GC]"),
	("BatteryCategory", "[B]"),
	("CableCategory", "[C]"),
	("LightCategory", "[L]"),
	("LogicIntegratedCircuitsCategory", "[IC]"),
	("LogicProcessorsCategory", "[CPU]"),
	("MotherboardCategory", "[MB]"),
	("Logic Variables", "[VAR]"),
	("Logic Slot Variables", "[SLOT]"),
	("Fabricators", "[FAB]"),
	("KitCategory", "[KIT]"),
	("FoodCategory", "[F]"),
	("Edibles", "[E]"),
	("Plants", "[PL]"),
	("PersonalSuits", "[SUIT]"),
	("PersonalHelmets", "[HLM]"),
	("ManualTools", "[T]"),
	("FireArm", "[W]"),
	("WallFloorCategory", "[WF]"),
	("DoorCategory", "[DR]"),
	("ChuteCategory", "[CH]"),
	("CargoCategory", "[CRG]"),
	("CartridgeCategory", "[CRT]"),
	("RocketEngineCategory", "[RKT]"),
	("GeneticDevices", "[GEN]"),
	("Genetics", "[DNA]"),
	("TradingDevices", "[TRD]"),
	("ApplianceCategory", "[APP]"),
	("Gases", "[GAS]"),
	("Reagents", "[REA]"),
	("OreHeader", "[ORE]"),
	("IngotHeader", "[ING]"),
	("SensorCategory", "[SEN]"),
	("ConsoleCategory", "[CON]"),
	("Other", "[-]"),
];

/// Keyword fallbacks for localized or host-supplied category names.
const ICON_KEYWORDS: &[(&str, &str)] = &[
	("atmos", "[A]"),
	("pipe", "[P]"),
	("battery", "[B]"),
	("power", "[B]"),
	("cable", "[C]"),
	("wire", "[C]"),
	("light", "[L]"),
	("logic", "[IC]"),
	("circuit", "[IC]"),
	("processor", "[CPU]"),
	("computer", "[CPU]"),
	("fabricat", "[FAB]"),
	("printer", "[FAB]"),
	("kit", "[KIT]"),
	("food", "[F]"),
	("edible", "[F]"),
	("plant", "[PL]"),
	("seed", "[PL]"),
	("suit", "[SUIT]"),
	("helmet", "[HLM]"),
	("tool", "[T]"),
	("weapon", "[W]"),
	("door", "[DR]"),
	("airlock", "[DR]"),
	("cargo", "[CRG]"),
	("rocket", "[RKT]"),
	("genetic", "[DNA]"),
	("reagent", "[REA]"),
	("ore", "[ORE]"),
	("ingot", "[ING]"),
	("sensor", "[SEN]"),
	("console", "[CON]"),
	("canister", "[GC]"),
	("gas", "[GAS]"),
];

/// Default icon tag when no mapping applies.
pub const DEFAULT_ICON: &str = "[-]";

/// Looks up the ASCII icon tag for a category label.
///
/// Group headers stay plain labels; this exists for hosts that style
/// individual rows. Unknown labels fall through a keyword scan before
/// landing on [`DEFAULT_ICON`], so a lookup never fails outright.
#[must_use]
pub fn icon_for_category(category: &str) -> &'static str {
	if category.is_empty() {
		return DEFAULT_ICON;
	}

	for (name, icon) in CATEGORY_ICONS {
		if name.eq_ignore_ascii_case(category) {
			return icon;
		}
	}

	let lower = category.to_lowercase();
	for (keyword, icon) in ICON_KEYWORDS {
		if lower.contains(keyword) {
			return icon;
		}
	}

	DEFAULT_ICON
}
