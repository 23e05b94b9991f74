//! The compile / install / run lifecycle

use supermind_foundation::{ErrorKind, ProgramId};
use supermind_player::{CompileStart, GameRules, RunResult, StopResult};

use crate::{T0, demo, player};

fn crawler() -> ProgramId {
    ProgramId::new("p_crawler")
}

#[test]
fn compile_takes_effort_over_allocated_cpu() {
    let content = demo();
    let rules = GameRules::default();
    let mut p = player(100);

    assert_eq!(
        p.start_compile(&crawler(), T0, &content).unwrap(),
        CompileStart::Started { cpu: 5 }
    );
    assert_eq!(p.free_cpu(&content), 5);
    assert!(p.software().known.contains(&crawler()));

    // 20 ticks of 60s at 5 cpu: 240s
    p.refresh(T0.plus_secs(239), &content, &rules);
    assert!(p.is_compiling());
    p.refresh(T0.plus_secs(240), &content, &rules);
    assert!(!p.is_compiling());
    assert!(p.software().installed.contains(&crawler()));
    assert_eq!(p.free_cpu(&content), 10);
}

#[test]
fn run_and_stop_move_between_sets() {
    let content = demo();
    let mut p = player(100);
    assert_eq!(p.run(&crawler(), &content).unwrap(), RunResult::NotInstalled);

    p.start_compile(&crawler(), T0, &content).unwrap();
    p.refresh(T0.plus_secs(240), &content, &GameRules::default());

    assert_eq!(p.run(&crawler(), &content).unwrap(), RunResult::Started);
    assert_eq!((p.used_cpu(&content), p.used_ram(&content)), (4, 3));
    assert_eq!(p.stop(&crawler()), StopResult::Stopped);
    assert_eq!(p.stop(&crawler()), StopResult::NotRunning);
    assert!(p.software().installed.contains(&crawler()));
}

#[test]
fn run_reports_which_budget_is_short() {
    let content = demo();
    // 9 lore: 3 cpu, 0 ram
    let mut p = player(9);
    p.start_compile(&crawler(), T0, &content).unwrap();
    p.refresh(T0.plus_secs(100_000), &content, &GameRules::default());
    assert_eq!(
        p.run(&crawler(), &content).unwrap(),
        RunResult::Insufficient { cpu: true, ram: true }
    );
}

#[test]
fn no_cpu_means_no_compile() {
    let content = demo();
    let mut p = player(0);
    assert_eq!(
        p.start_compile(&crawler(), T0, &content).unwrap(),
        CompileStart::InsufficientCpu
    );
    assert!(!p.is_compiling());
}

#[test]
fn unknown_program_is_a_content_reference() {
    let content = demo();
    let mut p = player(100);
    let err = p.start_compile(&ProgramId::new("p_none"), T0, &content).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownProgram(_)));
    assert!(err.is_content_reference());
}
