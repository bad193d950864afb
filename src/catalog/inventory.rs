// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Seed inventory

use crate::model::{
    AuthenticityLevel, AvailabilityStatus, BulkPrice, Category, Component, ComponentSpecification,
    Dimensions, Pricing,
};

use AuthenticityLevel::{FirstCopy, Generic, Oem, Unknown};
use AvailabilityStatus::{Discontinued, InStock, Limited, OutOfStock};

struct Seed(Component);

impl Seed {
    fn new(id: &str, name: &str, category: Category, part_number: &str) -> Self {
        let mut specification = ComponentSpecification::new(category);
        specification.part_number = part_number.to_string();
        Self(Component {
            id: id.to_string(),
            name: name.to_string(),
            specification,
            authenticity: AuthenticityLevel::Unknown,
            availability: AvailabilityStatus::Unknown,
            pricing: Pricing::default(),
            market_location: String::new(),
            price_history: Vec::new(),
        })
    }

    fn electrical(mut self, voltage: f64, current: f64, frequency: f64, power: f64) -> Self {
        let e = &mut self.0.specification.electrical;
        e.voltage = voltage;
        e.current = current;
        e.frequency = frequency;
        e.power = power;
        self
    }

    fn physical(mut self, (length, width, height): (f64, f64, f64), grams: f64, form_factor: &str) -> Self {
        let p = &mut self.0.specification.physical;
        p.dimensions = Dimensions { length, width, height };
        p.weight = grams;
        p.form_factor = form_factor.to_string();
        self
    }

    fn compat(mut self, socket: &str, interface: &str, pin_config: &str) -> Self {
        let c = &mut self.0.specification.compatibility;
        c.socket = socket.to_string();
        c.interface = interface.to_string();
        c.pin_config = pin_config.to_string();
        self
    }

    fn cores(mut self, cores: u32) -> Self {
        self.0.specification.cores = cores;
        self
    }

    fn capacity(mut self, gb: f64) -> Self {
        self.0.specification.capacity_gb = gb;
        self
    }

    fn sourcing(mut self, authenticity: AuthenticityLevel, availability: AvailabilityStatus, location: &str) -> Self {
        self.0.authenticity = authenticity;
        self.0.availability = availability;
        self.0.market_location = location.to_string();
        self
    }

    fn price(mut self, retail: f64, market: f64, bulk: &[(u32, f64)]) -> Self {
        self.0.pricing = Pricing {
            retail,
            market,
            bulk: bulk
                .iter()
                .map(|(min_quantity, unit_price)| BulkPrice {
                    min_quantity: *min_quantity,
                    unit_price: *unit_price,
                })
                .collect(),
        };
        self
    }

    fn history(mut self, points: &[f64]) -> Self {
        self.0.price_history = points.to_vec();
        self
    }

    fn build(self) -> Component {
        self.0
    }
}

/// Built-in inventory
pub fn builtin_inventory() -> Vec<Component> {
    vec![
        // Processors
        Seed::new("cpu-i7-12700k", "Intel Core i7-12700K", Category::Processor, "i7-12700K")
            .electrical(1.25, 0.0, 3600.0, 125.0)
            .physical((37.5, 37.5, 4.4), 68.0, "LGA")
            .compat("LGA1700", "", "1700")
            .cores(12)
            .sourcing(Oem, InStock, "authorized-distributor-us")
            .price(409.0, 379.0, &[(10, 369.0), (50, 339.0)])
            .history(&[419.0, 409.0, 399.0])
            .build(),
        Seed::new("cpu-i7-12700k-tray", "Intel Core i7-12700K (tray)", Category::Processor, "i7-12700K")
            .electrical(1.25, 0.0, 3600.0, 125.0)
            .physical((37.5, 37.5, 4.4), 66.0, "LGA")
            .compat("LGA1700", "", "1700")
            .cores(12)
            .sourcing(FirstCopy, Limited, "shenzhen-huaqiangbei")
            .price(0.0, 329.0, &[])
            .history(&[360.0, 345.0, 329.0])
            .build(),
        Seed::new("cpu-i5-12600k", "Intel Core i5-12600K", Category::Processor, "i5-12600K")
            .electrical(1.25, 0.0, 3700.0, 125.0)
            .physical((37.5, 37.5, 4.4), 65.0, "LGA")
            .compat("LGA1700", "", "1700")
            .cores(10)
            .sourcing(Oem, InStock, "taipei-guanghua")
            .price(289.0, 269.0, &[(10, 259.0)])
            .history(&[289.0, 285.0, 279.0])
            .build(),
        Seed::new("cpu-ryzen7-5800x", "AMD Ryzen 7 5800X", Category::Processor, "Ryzen 7 5800X")
            .electrical(1.35, 0.0, 3800.0, 105.0)
            .physical((40.0, 40.0, 6.0), 63.0, "PGA")
            .compat("AM4", "", "1331")
            .cores(8)
            .sourcing(Oem, InStock, "authorized-distributor-us")
            .price(299.0, 259.0, &[(10, 249.0)])
            .history(&[279.0, 265.0, 259.0])
            .build(),
        Seed::new("cpu-i7-12700k-unbranded", "i7-12700K (unbranded listing)", Category::Processor, "i7-12700K")
            .electrical(1.25, 0.0, 3600.0, 125.0)
            .physical((37.5, 37.5, 4.4), 40.0, "LGA")
            .compat("LGA1700", "", "1700")
            .cores(12)
            .sourcing(Unknown, AvailabilityStatus::Unknown, "online-marketplace")
            .price(0.0, 149.0, &[])
            .build(),
        // Memory
        Seed::new("mem-ddr4-16-3200", "Corsair Vengeance LPX 16GB DDR4-3200", Category::Memory, "CMK16GX4M1E3200C16")
            .electrical(1.35, 0.0, 3200.0, 3.0)
            .physical((133.35, 31.25, 7.0), 40.0, "DIMM")
            .compat("DDR4", "DIMM", "288")
            .capacity(16.0)
            .sourcing(Oem, InStock, "authorized-distributor-us")
            .price(49.99, 44.0, &[(10, 42.0), (50, 39.0)])
            .history(&[54.0, 51.0, 49.99])
            .build(),
        Seed::new("mem-ddr4-16-3200-generic", "Generic 16GB DDR4-3200", Category::Memory, "GM16D4U3200")
            .electrical(1.35, 0.0, 3200.0, 3.0)
            .physical((133.35, 31.25, 7.0), 34.0, "DIMM")
            .compat("DDR4", "DIMM", "288")
            .capacity(16.0)
            .sourcing(Generic, InStock, "online-marketplace")
            .price(0.0, 29.0, &[])
            .history(&[29.0, 29.0, 29.0])
            .build(),
        Seed::new("mem-ddr5-32-6000", "G.Skill Trident Z5 32GB DDR5-6000", Category::Memory, "F5-6000J3636F16G")
            .electrical(1.35, 0.0, 6000.0, 5.0)
            .physical((133.35, 42.0, 8.0), 54.0, "DIMM")
            .compat("DDR5", "DIMM", "288")
            .capacity(32.0)
            .sourcing(Oem, Limited, "taipei-guanghua")
            .price(119.0, 109.0, &[(10, 104.0)])
            .history(&[99.0, 109.0, 119.0])
            .build(),
        Seed::new("mem-ddr4-8-2666-sodimm", "Kingston 8GB DDR4-2666 SO-DIMM", Category::Memory, "KVR26S19S8")
            .electrical(1.2, 0.0, 2666.0, 2.0)
            .physical((69.6, 30.0, 3.8), 31.0, "SO-DIMM")
            .compat("DDR4", "SO-DIMM", "260")
            .capacity(8.0)
            .sourcing(Oem, OutOfStock, "refurbisher-eu")
            .price(24.99, 27.0, &[])
            .build(),
        // Graphics
        Seed::new("gpu-rtx-4090", "NVIDIA GeForce RTX 4090 Founders Edition", Category::Graphics, "RTX 4090")
            .electrical(12.0, 37.5, 2520.0, 450.0)
            .physical((304.0, 137.0, 61.0), 2186.0, "")
            .compat("", "PCIe", "")
            .capacity(24.0)
            .sourcing(Oem, Limited, "authorized-distributor-us")
            .price(1599.0, 1899.0, &[(3, 1579.0)])
            .history(&[1750.0, 1820.0, 1899.0])
            .build(),
        Seed::new("gpu-rtx-3060", "GeForce RTX 3060 12GB", Category::Graphics, "RTX 3060")
            .electrical(12.0, 14.2, 1777.0, 170.0)
            .physical((242.0, 112.0, 40.0), 1150.0, "")
            .compat("", "PCIe", "")
            .capacity(12.0)
            .sourcing(FirstCopy, InStock, "hong-kong-wholesale")
            .price(329.0, 249.0, &[])
            .history(&[300.0, 280.0, 249.0])
            .build(),
        Seed::new("gpu-rx-7900xtx", "AMD Radeon RX 7900 XTX", Category::Graphics, "RX 7900 XTX")
            .electrical(12.0, 29.6, 2500.0, 355.0)
            .physical((287.0, 123.0, 51.0), 1780.0, "")
            .compat("", "PCIe", "")
            .capacity(24.0)
            .sourcing(Oem, InStock, "authorized-distributor-us")
            .price(999.0, 949.0, &[(3, 979.0)])
            .history(&[999.0, 979.0, 949.0])
            .build(),
        Seed::new("gpu-gtx-1660-super", "GeForce GTX 1660 Super", Category::Graphics, "GTX 1660 Super")
            .electrical(12.0, 10.4, 1530.0, 125.0)
            .physical((229.0, 111.0, 38.0), 1000.0, "")
            .compat("", "PCIe", "")
            .capacity(6.0)
            .sourcing(Oem, Discontinued, "refurbisher-eu")
            .price(229.0, 199.0, &[])
            .history(&[189.0, 195.0, 199.0])
            .build(),
        // Storage
        Seed::new("ssd-sn850x-1tb", "WD Black SN850X 1TB", Category::Storage, "WDS100T2X0E")
            .electrical(3.3, 0.0, 0.0, 7.0)
            .physical((80.0, 22.0, 2.4), 56.0, "M.2")
            .compat("", "NVMe", "")
            .capacity(1000.0)
            .sourcing(Oem, InStock, "authorized-distributor-us")
            .price(89.99, 84.0, &[(10, 82.0)])
            .history(&[99.0, 94.0, 89.99])
            .build(),
        Seed::new("ssd-mx500-1tb", "Crucial MX500 1TB", Category::Storage, "CT1000MX500SSD1")
            .electrical(5.0, 0.0, 0.0, 4.0)
            .physical((100.0, 69.9, 7.0), 52.0, "2.5-INCH")
            .compat("", "SATA", "")
            .capacity(1000.0)
            .sourcing(Oem, InStock, "taipei-guanghua")
            .price(69.99, 64.0, &[])
            .build(),
        Seed::new("ssd-nvme-512-generic", "Generic 512GB NVMe SSD", Category::Storage, "NV512-G")
            .electrical(3.3, 0.0, 0.0, 5.0)
            .physical((80.0, 22.0, 2.2), 40.0, "M.2")
            .compat("", "NVMe", "")
            .capacity(512.0)
            .sourcing(Unknown, InStock, "online-marketplace")
            .price(0.0, 19.99, &[])
            .build(),
        Seed::new("hdd-ide-80gb", "Seagate Barracuda 80GB IDE", Category::Storage, "ST380011A")
            .electrical(5.0, 0.0, 0.0, 8.0)
            .physical((147.0, 101.6, 26.1), 58.0, "3.5-INCH")
            .compat("", "IDE", "40")
            .capacity(80.0)
            .sourcing(Oem, Discontinued, "refurbisher-eu")
            .price(0.0, 25.0, &[])
            .build(),
        // Motherboards
        Seed::new("mb-z690-atx", "ASUS PRIME Z690-P", Category::Motherboard, "PRIME-Z690-P")
            .electrical(12.0, 0.0, 0.0, 0.0)
            .physical((305.0, 244.0, 40.0), 880.0, "ATX")
            .compat("LGA1700", "PCIe", "24")
            .sourcing(Oem, InStock, "authorized-distributor-us")
            .price(219.0, 199.0, &[(5, 209.0)])
            .build(),
        Seed::new("mb-b550-matx", "MSI B550M PRO-VDH", Category::Motherboard, "B550M-PRO-VDH")
            .electrical(12.0, 0.0, 0.0, 0.0)
            .physical((244.0, 244.0, 40.0), 820.0, "MICRO-ATX")
            .compat("AM4", "PCIe", "24")
            .sourcing(Oem, Limited, "taipei-guanghua")
            .price(109.0, 99.0, &[])
            .build(),
        // Power supplies
        Seed::new("psu-750w-gold", "Corsair RM750x 750W 80+ Gold", Category::PowerSupply, "CP-9020199")
            .electrical(12.0, 62.5, 0.0, 750.0)
            .physical((160.0, 150.0, 86.0), 1900.0, "ATX")
            .compat("", "ATX 24-pin", "24")
            .sourcing(Oem, InStock, "authorized-distributor-us")
            .price(119.99, 109.0, &[(10, 104.0)])
            .history(&[129.99, 124.99, 119.99])
            .build(),
        Seed::new("psu-500w-generic", "Generic 500W PSU", Category::PowerSupply, "GP-500")
            .electrical(12.0, 30.0, 0.0, 500.0)
            .physical((150.0, 140.0, 86.0), 1450.0, "ATX")
            .compat("", "ATX 24-pin", "24")
            .sourcing(Generic, InStock, "online-marketplace")
            .price(0.0, 34.99, &[])
            .build(),
        // Cooling
        Seed::new("cool-nf-a12x25", "Noctua NF-A12x25 PWM", Category::Cooling, "NF-A12X25")
            .electrical(12.0, 0.14, 0.0, 1.68)
            .physical((120.0, 120.0, 25.0), 135.0, "120MM")
            .compat("", "4-pin PWM", "4")
            .sourcing(Oem, InStock, "authorized-distributor-us")
            .price(32.95, 29.95, &[(10, 28.0)])
            .build(),
        Seed::new("cool-laminar-rm1", "Intel Laminar RM1 cooler", Category::Cooling, "RM1")
            .electrical(12.0, 0.2, 0.0, 2.4)
            .physical((96.0, 96.0, 47.0), 160.0, "LGA1700")
            .compat("LGA1700", "4-pin PWM", "4")
            .sourcing(Oem, InStock, "taipei-guanghua")
            .price(19.0, 15.0, &[])
            .build(),
        Seed::new("cool-fan-120-generic", "Generic 120mm PWM fan", Category::Cooling, "GF120-PWM")
            .electrical(12.0, 0.2, 0.0, 2.4)
            .physical((120.0, 120.0, 25.0), 118.0, "120MM")
            .compat("", "4-pin PWM", "4")
            .sourcing(Generic, InStock, "online-marketplace")
            .price(0.0, 4.99, &[])
            .build(),
        // Networking
        Seed::new("nic-i225-v", "Intel I225-V 2.5GbE PCIe NIC", Category::Networking, "I225-V")
            .electrical(3.3, 0.0, 0.0, 3.0)
            .physical((120.0, 68.0, 18.0), 62.0, "")
            .compat("", "PCIe", "")
            .sourcing(Oem, InStock, "authorized-distributor-us")
            .price(39.99, 35.0, &[])
            .build(),
        Seed::new("nic-usb-rtl8153", "USB 3.0 Gigabit Ethernet Adapter", Category::Networking, "RTL8153")
            .electrical(5.0, 0.18, 0.0, 0.9)
            .physical((60.0, 25.0, 15.0), 55.0, "")
            .compat("", "USB", "")
            .sourcing(Generic, InStock, "shenzhen-huaqiangbei")
            .price(0.0, 14.99, &[])
            .build(),
        // Peripherals
        Seed::new("per-ftdi-us232r", "FTDI USB to RS-232 cable", Category::Peripherals, "US232R-10")
            .electrical(5.0, 0.1, 0.0, 0.5)
            .physical((1000.0, 20.0, 15.0), 110.0, "")
            .compat("", "USB", "")
            .sourcing(Oem, InStock, "authorized-distributor-us")
            .price(29.0, 27.0, &[])
            .build(),
        Seed::new("per-ps2-mouse", "Logitech PS/2 optical mouse", Category::Peripherals, "M-S34")
            .electrical(5.0, 0.1, 0.0, 0.5)
            .physical((113.0, 62.0, 38.0), 100.0, "")
            .compat("", "PS/2", "6")
            .sourcing(Oem, Discontinued, "refurbisher-eu")
            .price(0.0, 12.0, &[])
            .build(),
        Seed::new("per-ls2208-serial", "Symbol LS2208 serial barcode scanner", Category::Peripherals, "LS2208")
            .electrical(5.0, 0.175, 0.0, 0.9)
            .physical((170.0, 70.0, 90.0), 140.0, "")
            .compat("", "Serial", "9")
            .sourcing(Oem, Discontinued, "refurbisher-eu")
            .price(0.0, 45.0, &[])
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let inventory = builtin_inventory();
        let ids: HashSet<_> = inventory.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), inventory.len());
    }

    #[test]
    fn test_every_category_is_stocked() {
        let inventory = builtin_inventory();
        for category in Category::ALL {
            assert!(
                inventory.iter().any(|c| c.category() == category),
                "no component for {}",
                category
            );
        }
    }

    #[test]
    fn test_every_component_has_a_price() {
        for component in builtin_inventory() {
            assert!(component.pricing.base_price() > 0.0, "{} has no price", component.id);
        }
    }
}
