//! Software commands and cards in the demo world

use supermind_engine::Handled;
use supermind_engine::dispatch::CONTENT_FALLBACK;
use supermind_foundation::ProgramId;
use supermind_player::Action;

use crate::World;

const CATALOG: &str = "New programs:\n\
    Crawler /view_p_crawler /compile_p_crawler\n\
    Indexer /view_p_indexer /compile_p_indexer";

#[test]
fn fresh_player_sees_the_catalog() {
    let mut world = World::new();
    assert_eq!(world.say("/software"), Handled::Command("software"));
    assert_eq!(world.outbox.last(), CATALOG);
}

#[test]
fn compile_run_stop() {
    let mut world = World::new();

    world.say("/compile_p_indexer");
    assert_eq!(world.outbox.last(), "Compiling Indexer on 5 CPU");
    world.say("/compile_p_crawler");
    assert_eq!(world.outbox.last(), "Another program is still compiling");
    world.say("/run_p_indexer");
    assert_eq!(world.outbox.last(), "Compile the program first");

    // 5 ticks of 60s on 5 CPU
    world.now = world.now.plus_secs(30);
    world.press(&Action::ShowMind);
    assert!(world.outbox.last().contains("CPU: 5 / 10"));
    assert!(world.outbox.last().ends_with("Compiling Indexer: 50% done"));

    world.now = world.now.plus_secs(30);
    world.say("/run_p_indexer");
    assert_eq!(world.outbox.last(), "Starting Indexer");
    world.say("/software");
    assert_eq!(
        world.outbox.last(),
        "Running programs:\nIndexer /view_p_indexer /stop_p_indexer\n\n\
         New programs:\nCrawler /view_p_crawler /compile_p_crawler"
    );

    world.say("/stop_p_indexer");
    assert_eq!(world.outbox.last(), "Program Indexer stopped");
    world.say("/stop_p_indexer");
    assert_eq!(world.outbox.last(), "Program Indexer is not running");

    let stored = world.stored();
    assert!(stored.software().installed.contains(&ProgramId::new("p_indexer")));
    assert!(stored.software().running.is_empty());
}

#[test]
fn owned_program_is_not_compiled_twice() {
    let mut world = World::new();
    world.say("/compile_p_indexer");
    world.now = world.now.plus_secs(60);
    world.say("/run_p_indexer");
    assert_eq!(world.outbox.last(), "Starting Indexer");

    world.say("/compile_p_indexer");
    assert_eq!(world.outbox.last(), "Program Indexer is already compiled");

    world.now = world.now.plus_secs(3600);
    world.say("/software");
    assert_eq!(
        world.outbox.last(),
        "Running programs:\nIndexer /view_p_indexer /stop_p_indexer\n\n\
         New programs:\nCrawler /view_p_crawler /compile_p_crawler"
    );
    let stored = world.stored();
    assert!(stored.software().compiling.is_none());
    assert!(stored.software().installed.is_empty());
}

#[test]
fn mind_summarizes_resources() {
    let mut world = World::new();
    world.press(&Action::ShowMind);
    assert_eq!(
        world.outbox.last(),
        "Supermind 5\nLore: 100\nRaw lore: 0\nMemory: 0 / 10\nCPU: 0 / 10\n\
         Running programs: 0\nCompiled programs: 0\nNew programs: 2 /software"
    );
}

#[test]
fn run_without_memory_explains_why() {
    let mut world = World::new();
    // 3 CPU, no RAM
    world.player = world.player.clone().with_lore(9);
    world.say("/compile_p_indexer");
    assert_eq!(world.outbox.last(), "Compiling Indexer on 1 CPU");

    world.now = world.now.plus_secs(300);
    world.say("/run_p_indexer");
    assert_eq!(world.outbox.last(), "Could not start the program\nNot enough free memory");
}

#[test]
fn cards() {
    let mut world = World::new();
    world.say("/view_p_indexer");
    assert_eq!(
        world.outbox.last(),
        "Indexer\nSorts what you have learned.\nCPU: 2, RAM: 1, compile time: 5"
    );
    world.say("/view_i_key");
    assert_eq!(world.outbox.last(), "Brass key\nA small brass key with a tag: 003.\nWeight: 0.3");

    let sent = world.outbox.sent.len();
    assert_eq!(world.say("/view_x_nothing"), Handled::Command("view"));
    assert_eq!(world.outbox.sent.len(), sent);
}

#[test]
fn compiling_an_unknown_program_falls_back() {
    let mut world = World::new();
    assert_eq!(world.say("/compile_p_ghost"), Handled::ContentFallback);
    assert_eq!(world.outbox.last(), CONTENT_FALLBACK);
}
