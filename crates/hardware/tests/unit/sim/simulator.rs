//! # Simulator Tests
//!
//! Verifies the top-level wrapper: construction from images, running, and
//! reporting with the configured window.

use std::io::Write as _;

use crate::common::builder::instruction::inst;
use crate::common::harness::image_text;
use e20sim_core::Simulator;
use e20sim_core::common::error::LoadError;
use e20sim_core::config::Config;
use e20sim_core::core::Memory;

fn program() -> Vec<u16> {
    vec![
        inst().addi(1, 0, 5).build(),
        inst().addi(2, 0, 3).build(),
        inst().add(3, 1, 2).build(),
        inst().j(3).build(),
    ]
}

#[test]
fn from_reader_runs_to_halt() {
    let text = image_text(&program());
    let mut sim = Simulator::from_reader(text.as_bytes(), Config::default()).unwrap();
    assert!(!sim.is_halted());
    assert_eq!(sim.run().unwrap(), 4);
    assert!(sim.is_halted());
    assert_eq!(sim.cpu.regs.read(3), 8);
}

#[test]
fn from_reader_propagates_load_errors() {
    let err = Simulator::from_reader("ram[5] = 16'b0;".as_bytes(), Config::default()).unwrap_err();
    assert!(matches!(err, LoadError::OutOfSequence { .. }));
}

#[test]
fn from_file_loads_image() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(image_text(&program()).as_bytes()).unwrap();
    let mut sim = Simulator::from_file(file.path(), Config::default()).unwrap();
    let _ = sim.run().unwrap();
    assert_eq!(sim.cpu.pc, 3);
}

#[test]
fn start_pc_comes_from_config() {
    let mut config = Config::default();
    config.general.start_pc = 2;
    let mut mem = Memory::new();
    mem.load_image(&program()).unwrap();
    let mut sim = Simulator::new(mem, config);
    assert_eq!(sim.cpu.pc, 2);
    assert_eq!(sim.run().unwrap(), 2);
    assert_eq!(sim.cpu.regs.read(3), 0);
}

#[test]
fn trace_flag_comes_from_config() {
    let mut config = Config::default();
    config.general.trace_instructions = true;
    let sim = Simulator::new(Memory::new(), config);
    assert!(sim.cpu.trace);
}

#[test]
fn report_uses_configured_window() {
    let mut config = Config::default();
    config.report.display_words = 8;
    let text = image_text(&program());
    let mut sim = Simulator::from_reader(text.as_bytes(), config).unwrap();
    let _ = sim.run().unwrap();
    assert!(
        sim.report()
            .ends_with("\t$7=    0\n2085 2103 0530 4003 0000 0000 0000 0000 \n\n")
    );
}

#[test]
fn default_report_dumps_sixteen_lines() {
    let mut sim = Simulator::new(Memory::new(), Config::default());
    sim.cpu.halted = true;
    let report = sim.report();
    assert_eq!(report.lines().count(), 1 + 1 + 8 + 16 + 1);
}
