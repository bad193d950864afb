// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Pattern library for specification parsing.
//!
//! Category patterns and unit patterns run on lowercased, whitespace-normalized
//! text. Part-number patterns run on whitespace-normalized text with the
//! original case kept.

use regex::Regex;

use crate::model::Category;

/// Optional whitespace-separated minus sign, then a decimal number that
/// starts a word. Group 1 is the sign, group 2 the magnitude.
const NUMBER: &str = r"(?:(?:^|\s)(-))?\b(\d+(?:\.\d+)?)";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern must compile")
}

fn unit_pattern(units: &str) -> Regex {
    compile(&format!(r"{}\s?({})\b", NUMBER, units))
}

/// Compiled regex tables, built once per process
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    category_patterns: Vec<(Category, Vec<Regex>)>,
    part_number_patterns: Vec<Regex>,
    reserved_tokens: Regex,
    pub voltage: Regex,
    pub current: Regex,
    pub frequency: Regex,
    pub power: Regex,
    pub capacity: Regex,
    /// Module count times module size, e.g. "2x8gb"
    pub kit_capacity: Regex,
    pub cores: Regex,
    pub dimensions: Regex,
    pub weight: Regex,
    /// Text where a bare "5g" names a network generation, not grams
    pub wireless_context: Regex,
    pub form_factor: Regex,
    pub socket: Regex,
    pub pin_config: Regex,
    interfaces: Vec<(Regex, &'static str)>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self {
            category_patterns: Category::ALL
                .iter()
                .map(|category| {
                    let patterns = category_sources(*category)
                        .iter()
                        .map(|p| compile(p))
                        .collect();
                    (*category, patterns)
                })
                .collect(),
            part_number_patterns: vec![
                // Labeled: "part number: X", "p/n X", "model: X", "mpn X"
                compile(
                    r"(?i)\b(?:part\s*(?:number|no\.?|#)|p/n|mpn|model)\s*[:#]?\s*([a-z0-9][a-z0-9./-]{2,})",
                ),
                // Intel Core: i7-12700K
                compile(r"(?i)\b(i[3579]-\d{4,5}[a-z]{0,2})\b"),
                // AMD Ryzen: Ryzen 7 5800X3D
                compile(r"(?i)\b(ryzen\s+[3579]\s+\d{4}[a-z0-9]{0,3})\b"),
                // GPU model: RTX 4090, RX 7900 XTX
                compile(r"(?i)\b((?:rtx|gtx|rx)\s?\d{3,4}(?:\s?(?:ti|super|xtx|xt))?)\b"),
                // Vendor SKU: SN850X, CMK16GX4M2B3200C16, NH-D15
                compile(r"\b((?:[A-Z]+-)?[A-Z]{1,5}[0-9]{2,}[A-Z0-9-]*)\b"),
            ],
            reserved_tokens: compile(
                r"^(?:lga\d{3,4}|am[345]|sp[35]|str[45]|tr4|fm2|ddr[2-5]x?|gddr[5-7]x?|x\d{1,2}|usb\d|pcie\d?|cl\d{1,2}|rj\d{2})$",
            ),
            voltage: unit_pattern(r"v|volts?"),
            current: unit_pattern(r"a|amps?|amperes?"),
            frequency: unit_pattern(r"ghz|mhz"),
            power: unit_pattern(r"w|watts?"),
            capacity: unit_pattern(r"gb|tb"),
            kit_capacity: compile(r"\b(\d+)\s?x\s?(\d+(?:\.\d+)?)\s?(gb|tb)\b"),
            cores: compile(r"\b(\d+)[-\s]?cores?\b"),
            dimensions: compile(
                r"(\d+(?:\.\d+)?)\s?x\s?(\d+(?:\.\d+)?)(?:\s?x\s?(\d+(?:\.\d+)?))?\s?mm\b",
            ),
            weight: unit_pattern(r"kg|g|grams?"),
            wireless_context: compile(r"\b(?:wi-?fi|wireless|wlan|lte|cellular|modem)\b"),
            form_factor: compile(
                r"\b(e-atx|micro-atx|matx|mini-itx|atx|itx|sfx|so-dimm|sodimm|dimm|m\.2|2\.5-inch|3\.5-inch)\b",
            ),
            socket: compile(r"\b(lga\s?\d{3,4}|am[345]|sp[35]|str[45]|tr4|fm2|ddr[2-5]x?)\b"),
            pin_config: compile(r"\b(\d{2,4})[-\s]?pins?\b"),
            interfaces: interface_sources()
                .iter()
                .map(|(pattern, canonical)| (compile(pattern), *canonical))
                .collect(),
        }
    }

    /// Number of category patterns that match the text
    pub fn category_match_count(&self, category: Category, text: &str) -> usize {
        self.category_patterns
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, patterns)| patterns.iter().filter(|p| p.is_match(text)).count())
            .unwrap_or(0)
    }

    /// Ordered part-number patterns; first match wins
    pub fn part_number_patterns(&self) -> &[Regex] {
        &self.part_number_patterns
    }

    /// Whether a token names a socket, memory type or lane width rather than a part
    pub fn is_reserved_token(&self, token: &str) -> bool {
        self.reserved_tokens.is_match(&token.to_lowercase())
    }

    /// First interface pattern that matches, as its canonical name
    pub fn match_interface(&self, text: &str) -> Option<&'static str> {
        self.interfaces
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
            .map(|(_, canonical)| *canonical)
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

fn category_sources(category: Category) -> &'static [&'static str] {
    match category {
        Category::Processor => &[
            r"\b(cpu|processor)\b",
            r"\bi[3579]-\d{4,5}[a-z]{0,2}\b",
            r"\b(ryzen|xeon|threadripper|athlon|pentium|celeron|epyc|core\s?i[3579])\b",
            r"\b(lga\s?\d{3,4}|am[345]|sp[35]|str[45]|tr4)\b",
            r"\d(\.\d+)?\s?ghz\b",
            r"\b\d+[-\s]?cores?\b",
        ],
        Category::Memory => &[
            r"\bddr[2-5]x?\b",
            r"\b(so-?dimm|dimm|udimm|rdimm|ecc)\b",
            r"\b(ram|memory)\b",
            r"\b\d{3,4}\s?mhz\b",
            r"\bcl\d{2}\b",
        ],
        Category::Graphics => &[
            r"\b(gpu|graphics|video card|graphics card)\b",
            r"\b(rtx|gtx)\s?\d{3,4}\b",
            r"\b(radeon|geforce|nvidia|rx\s?\d{4})\b",
            r"\bgddr[5-7]x?\b",
            r"\bpcie\s?(?:[345]\.0\s?)?x16\b",
            r"\bvram\b",
        ],
        Category::Storage => &[
            r"\b(ssd|hdd|nvme|solid state|hard drive)\b",
            r"\bm\.2\b",
            r"\b\d+(\.\d+)?\s?tb\b",
            r"\b\d{4,5}\s?rpm\b",
            r"\b(sata|sas)\b",
            r"\b(tbw|mb/s)\b",
        ],
        Category::Motherboard => &[
            r"\b(motherboard|mainboard|mobo)\b",
            r"\b[zbhx]\d{3}[a-z]?\b",
            r"\b(e-atx|micro-atx|matx|mini-itx|itx)\b",
            r"\bchipset\b",
            r"\b(dimm slots?|m\.2 slots?)\b",
        ],
        Category::PowerSupply => &[
            r"\b(psu|power supply)\b",
            r"\b\d{3,4}\s?w(atts?)?\b",
            r"\b80\s?(\+|plus)",
            r"\b(bronze|silver|gold|platinum|titanium)\b",
            r"\b(modular|semi-modular)\b",
            r"\batx\s?3\.\d\b",
        ],
        Category::Cooling => &[
            r"\b(cooler|cooling|heatsink|heat sink)\b",
            r"\bfans?\b",
            r"\b(aio|liquid|radiator|water block)\b",
            r"\b(thermal paste|tim)\b",
            r"\b\d{2,3}\s?cfm\b",
            r"\bpwm\b",
        ],
        Category::Networking => &[
            r"\b(ethernet|network|nic|lan)\b",
            r"\b(wifi|wi-fi|wireless|bluetooth)\b",
            r"\b(rj-?45|sfp\+?)",
            r"\b\d+(\.\d+)?\s?g(bps|be)\b",
            r"\b802\.11[a-z]{1,2}\b",
        ],
        Category::Peripherals => &[
            r"\b(keyboard|mouse|monitor|webcam|headset|speaker|printer|scanner)\b",
            r"\busb hub\b",
            r"\b(kvm|dock|docking station)\b",
        ],
    }
}

fn interface_sources() -> &'static [(&'static str, &'static str)] {
    &[
        (r"\bpci[-\s]?e(?:xpress)?\b|\bpci express\b", "PCIe"),
        (r"\bnvme\b", "NVMe"),
        (r"\bsata\b", "SATA"),
        (r"\bthunderbolt\b", "Thunderbolt"),
        (r"\busb[-\s]?c\b", "USB-C"),
        (r"\busb\b", "USB"),
        (r"\bhdmi\b", "HDMI"),
        (r"\bdisplayport\b", "DisplayPort"),
        (r"\brj-?45\b|\bethernet\b", "RJ45"),
        (r"\bsfp\+?", "SFP"),
        (r"\bdvi\b", "DVI"),
        (r"\bvga\b", "VGA"),
        (r"\bps/2\b", "PS/2"),
        (r"\bserial\b|\brs-?232\b", "Serial"),
        (r"\bparallel\b", "Parallel"),
        (r"\bide\b|\bpata\b", "IDE"),
        (r"\bagp\b", "AGP"),
        (r"\bpci\b", "PCI"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        let library = PatternLibrary::new();
        assert_eq!(library.category_patterns.len(), Category::ALL.len());
        assert_eq!(library.part_number_patterns().len(), 5);
    }

    #[test]
    fn test_category_counts() {
        let library = PatternLibrary::new();
        let text = "intel i7-12700k 3.6ghz lga1700";
        assert_eq!(library.category_match_count(Category::Processor, text), 3);
        assert_eq!(library.category_match_count(Category::Memory, text), 0);

        let text = "ddr4 16gb 3200mhz dimm";
        assert_eq!(library.category_match_count(Category::Memory, text), 3);
        assert_eq!(library.category_match_count(Category::Processor, text), 0);
    }

    #[test]
    fn test_graphics_beats_memory_on_gpu_text() {
        let library = PatternLibrary::new();
        let text = "rtx 4090 24gb gddr6x 2520mhz";
        assert!(
            library.category_match_count(Category::Graphics, text)
                > library.category_match_count(Category::Memory, text)
        );
    }

    #[test]
    fn test_reserved_tokens() {
        let library = PatternLibrary::new();
        assert!(library.is_reserved_token("LGA1700"));
        assert!(library.is_reserved_token("DDR5"));
        assert!(library.is_reserved_token("X16"));
        assert!(library.is_reserved_token("CL16"));
        assert!(library.is_reserved_token("RJ45"));
        assert!(!library.is_reserved_token("SN850X"));
        assert!(!library.is_reserved_token("CLX160"));
    }

    #[test]
    fn test_interface_order_prefers_specific() {
        let library = PatternLibrary::new();
        assert_eq!(library.match_interface("pcie 4.0 x4"), Some("PCIe"));
        assert_eq!(library.match_interface("legacy pci card"), Some("PCI"));
        assert_eq!(library.match_interface("usb-c dock"), Some("USB-C"));
        assert_eq!(library.match_interface("usb 3.0 hub"), Some("USB"));
        assert_eq!(library.match_interface("ps/2 keyboard"), Some("PS/2"));
        assert_eq!(library.match_interface("no interface here"), None);
    }

    #[test]
    fn test_unit_pattern_captures_sign() {
        let library = PatternLibrary::new();
        let caps = library.voltage.captures("rail at -12v").unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("-"));
        assert_eq!(&caps[2], "12");

        // A hyphen glued to a previous token is not a sign
        let caps = library.frequency.captures("ddr4-3200mhz").unwrap();
        assert!(caps.get(1).is_none());
        assert_eq!(&caps[2], "3200");
    }

    #[test]
    fn test_weight_does_not_match_gigabytes() {
        let library = PatternLibrary::new();
        assert!(library.weight.captures("16gb 3.6ghz").is_none());
        let caps = library.weight.captures("weighs 1.2kg").unwrap();
        assert_eq!(&caps[2], "1.2");
        assert_eq!(&caps[3], "kg");
    }

    #[test]
    fn test_numbers_must_start_a_word() {
        let library = PatternLibrary::new();
        assert!(library.capacity.captures("2x8gb kit").is_none());
        let caps = library.kit_capacity.captures("2x8gb kit").unwrap();
        assert_eq!((&caps[1], &caps[2], &caps[3]), ("2", "8", "gb"));
    }

    #[test]
    fn test_sku_keeps_vendor_prefix() {
        let library = PatternLibrary::new();
        let sku = library.part_number_patterns().last().unwrap();
        let caps = sku.captures("Noctua NH-D15 cooler").unwrap();
        assert_eq!(&caps[1], "NH-D15");
    }
}
