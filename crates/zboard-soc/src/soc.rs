//! The SoC configuration: peripherals plus a categorized memory map.

use crate::error::SocError;

const ROM: &str = "ROM";
const MAIN_RAM: &str = "MAIN_RAM";
const CSR: &str = "CSR";

/// The configuration of a single memory-mapped peripheral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peripheral {
    /// Peripheral name (e.g., "UART", "TIMER0").
    pub name: String,
    /// Base address of the peripheral's register block.
    pub base_address: u32,
}

/// A named region of the SoC's memory map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRegion {
    /// Region name (e.g., "MAIN_RAM", "SRAM").
    pub name: String,
    /// Base address.
    pub base_address: u32,
    /// Size in bytes.
    pub size: u32,
}

impl MemoryRegion {
    /// Exclusive upper bound of the region.
    ///
    /// Widened to `u64` so a region touching the top of the 32-bit address
    /// space has a representable end.
    pub fn end(&self) -> u64 {
        u64::from(self.base_address) + u64::from(self.size)
    }
}

/// A complete SoC configuration.
///
/// Memory regions are routed into one of four slots by name when added:
/// `ROM` (optional), `MAIN_RAM` and `CSR` (each required, exactly once), and
/// a catch-all list for everything else. Routing a second region into one of
/// the three tracked slots is rejected outright.
#[derive(Debug, Clone)]
pub struct Soc {
    /// Name of the SoC, including any series prefix.
    pub name: String,
    /// Vendor name.
    pub vendor: String,
    peripherals: Vec<Peripheral>,
    rom: Option<MemoryRegion>,
    main_ram: Option<MemoryRegion>,
    csr: Option<MemoryRegion>,
    other_regions: Vec<MemoryRegion>,
}

impl Soc {
    /// Create an empty SoC configuration.
    pub fn new(name: impl Into<String>, vendor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vendor: vendor.into(),
            peripherals: Vec::new(),
            rom: None,
            main_ram: None,
            csr: None,
            other_regions: Vec::new(),
        }
    }

    /// Append a peripheral, preserving descriptor order.
    pub fn add_peripheral(&mut self, peripheral: Peripheral) {
        self.peripherals.push(peripheral);
    }

    /// Route a memory region into its slot by name.
    ///
    /// A second `ROM`, `MAIN_RAM`, or `CSR` region is an error.
    pub fn add_memory_region(&mut self, region: MemoryRegion) -> Result<(), SocError> {
        let slot = match region.name.as_str() {
            ROM => &mut self.rom,
            MAIN_RAM => &mut self.main_ram,
            CSR => &mut self.csr,
            _ => {
                self.other_regions.push(region);
                return Ok(());
            }
        };
        if slot.is_some() {
            return Err(SocError::DuplicateRegion { name: region.name });
        }
        *slot = Some(region);
        Ok(())
    }

    /// Peripherals in descriptor order.
    pub fn peripherals(&self) -> &[Peripheral] {
        &self.peripherals
    }

    /// The boot ROM region, if the SoC has one.
    pub fn rom(&self) -> Option<&MemoryRegion> {
        self.rom.as_ref()
    }

    /// The main RAM region.
    pub fn main_ram(&self) -> Result<&MemoryRegion, SocError> {
        self.main_ram
            .as_ref()
            .ok_or(SocError::MissingRegion { name: MAIN_RAM })
    }

    /// The CSR control-register region.
    pub fn csr(&self) -> Result<&MemoryRegion, SocError> {
        self.csr
            .as_ref()
            .ok_or(SocError::MissingRegion { name: CSR })
    }

    /// Base address of the CSR region.
    pub fn csr_base_address(&self) -> Result<u32, SocError> {
        self.csr().map(|region| region.base_address)
    }

    /// Memory regions usable by the OS: everything that is not ROM, main
    /// RAM, or the CSR block, in descriptor order.
    pub fn usable_memory_regions(&self) -> &[MemoryRegion] {
        &self.other_regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(name: &str, base_address: u32, size: u32) -> MemoryRegion {
        MemoryRegion {
            name: name.into(),
            base_address,
            size,
        }
    }

    #[test]
    fn main_ram_missing() {
        let soc = Soc::new("SOC1", "Acme");
        let result = soc.main_ram();
        assert!(matches!(
            result,
            Err(SocError::MissingRegion { name: "MAIN_RAM" })
        ));
    }

    #[test]
    fn main_ram_present() {
        let mut soc = Soc::new("SOC1", "Acme");
        soc.add_memory_region(region("MAIN_RAM", 0x4000_0000, 0x1_0000))
            .unwrap();
        let main_ram = soc.main_ram().unwrap();
        assert_eq!(main_ram.base_address, 0x4000_0000);
        assert_eq!(main_ram.size, 0x1_0000);
    }

    #[test]
    fn duplicate_main_ram_rejected() {
        let mut soc = Soc::new("SOC1", "Acme");
        soc.add_memory_region(region("MAIN_RAM", 0x4000_0000, 0x1_0000))
            .unwrap();
        let result = soc.add_memory_region(region("MAIN_RAM", 0x5000_0000, 0x1_0000));
        assert!(matches!(result, Err(SocError::DuplicateRegion { name }) if name == "MAIN_RAM"));
    }

    #[test]
    fn duplicate_rom_rejected() {
        let mut soc = Soc::new("SOC1", "Acme");
        soc.add_memory_region(region("ROM", 0x0000_0000, 0x8000))
            .unwrap();
        let result = soc.add_memory_region(region("ROM", 0x1000_0000, 0x8000));
        assert!(matches!(result, Err(SocError::DuplicateRegion { name }) if name == "ROM"));
    }

    #[test]
    fn csr_base_address_projection() {
        let mut soc = Soc::new("SOC1", "Acme");
        assert!(matches!(
            soc.csr_base_address(),
            Err(SocError::MissingRegion { name: "CSR" })
        ));
        soc.add_memory_region(region("CSR", 0xF000_0000, 0x1000))
            .unwrap();
        assert_eq!(soc.csr_base_address().unwrap(), 0xF000_0000);
    }

    #[test]
    fn usable_regions_exclude_tracked_slots() {
        let mut soc = Soc::new("SOC1", "Acme");
        soc.add_memory_region(region("SRAM", 0x1000_0000, 0x2000))
            .unwrap();
        soc.add_memory_region(region("ROM", 0x0000_0000, 0x8000))
            .unwrap();
        soc.add_memory_region(region("MAIN_RAM", 0x4000_0000, 0x1_0000))
            .unwrap();
        soc.add_memory_region(region("CSR", 0xF000_0000, 0x1000))
            .unwrap();
        soc.add_memory_region(region("HYPERRAM", 0x2000_0000, 0x4000))
            .unwrap();

        let names: Vec<&str> = soc
            .usable_memory_regions()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["SRAM", "HYPERRAM"]);
    }

    #[test]
    fn peripherals_keep_descriptor_order() {
        let mut soc = Soc::new("SOC1", "Acme");
        for (name, base_address) in [("UART", 0xF000_1000), ("TIMER0", 0xF000_2000)] {
            soc.add_peripheral(Peripheral {
                name: name.into(),
                base_address,
            });
        }
        let names: Vec<&str> = soc.peripherals().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["UART", "TIMER0"]);
    }

    #[test]
    fn region_end_is_exclusive() {
        assert_eq!(region("SRAM", 0x1000, 0x2000).end(), 0x3000);
        // A region ending exactly at the top of the address space.
        assert_eq!(region("MAIN_RAM", 0xFFFF_0000, 0x1_0000).end(), 0x1_0000_0000);
    }
}
