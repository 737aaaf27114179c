use client::{
    testing::ScriptedProgram,
    ListState,
    ListStateStore,
    SyncOrchestrator,
    ValidationError,
};
use gifport_interface::state::ListItem;
use solana_sdk::signature::Keypair;

fn loaded_items(orchestrator: &SyncOrchestrator<&ScriptedProgram>) -> Vec<ListItem> {
    match orchestrator.store().get() {
        ListState::Loaded(items) => items,
        other => panic!("expected a loaded store, got {other:?}"),
    }
}

#[tokio::test]
async fn append_then_refresh_shows_the_confirmed_item() {
    let program = ScriptedProgram::with_items(vec![ListItem::new("https://giphy.com/first.gif")]);
    let orchestrator = SyncOrchestrator::new(&program, ListStateStore::new());
    let user = Keypair::new();

    orchestrator
        .submit_link(&user, "https://media.giphy.com/second.gif")
        .await
        .unwrap();

    let items = loaded_items(&orchestrator);
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].link, "https://media.giphy.com/second.gif");
    assert_eq!(items[1].votes, 0);
}

#[tokio::test]
async fn rejected_links_never_reach_the_program() {
    let program = ScriptedProgram::with_items(vec![]);
    let orchestrator = SyncOrchestrator::new(&program, ListStateStore::new());
    let user = Keypair::new();

    assert_eq!(
        orchestrator
            .submit_link(&user, "https://tenor.com/abc.gif")
            .await,
        Err(ValidationError::UnsupportedSource)
    );
    assert_eq!(
        orchestrator.submit_link(&user, "   ").await,
        Err(ValidationError::EmptyInput)
    );

    assert_eq!(program.mutation_calls(), 0);
    assert_eq!(program.fetch_calls(), 0);
    assert_eq!(orchestrator.store().get(), ListState::Unknown);
}

#[tokio::test]
async fn votes_move_the_count_by_exactly_one() {
    let link = "https://media.giphy.com/popular.gif";
    let program = ScriptedProgram::with_items(vec![ListItem {
        link: link.to_owned(),
        votes: 3,
    }]);
    let orchestrator = SyncOrchestrator::new(&program, ListStateStore::new());
    let user = Keypair::new();

    orchestrator.vote(&user, link, true).await;
    assert_eq!(loaded_items(&orchestrator)[0].votes, 4);

    orchestrator.vote(&user, link, false).await;
    assert_eq!(loaded_items(&orchestrator)[0].votes, 3);
}

#[tokio::test]
async fn duplicate_links_resolve_to_the_first_match() {
    let link = "https://giphy.com/twice.gif";
    let program = ScriptedProgram::with_items(vec![
        ListItem::new(link),
        ListItem::new(link),
    ]);
    let orchestrator = SyncOrchestrator::new(&program, ListStateStore::new());

    orchestrator.vote(&Keypair::new(), link, true).await;

    let items = loaded_items(&orchestrator);
    assert_eq!(items[0].votes, 1);
    assert_eq!(items[1].votes, 0);
}

#[tokio::test]
async fn fetch_failure_forces_uninitialized() {
    let program = ScriptedProgram::with_items(vec![ListItem::new("https://giphy.com/a.gif")]);
    let orchestrator = SyncOrchestrator::new(&program, ListStateStore::new());

    orchestrator.refresh().await;
    assert_eq!(loaded_items(&orchestrator).len(), 1);

    program.set_fail_fetches(true);
    orchestrator.refresh().await;

    assert_eq!(orchestrator.store().get(), ListState::Uninitialized);
}

#[tokio::test]
async fn failed_mutations_leave_the_store_untouched() {
    let program = ScriptedProgram::with_items(vec![ListItem::new("https://giphy.com/a.gif")]);
    let orchestrator = SyncOrchestrator::new(&program, ListStateStore::new());
    let user = Keypair::new();

    orchestrator.refresh().await;
    let before = orchestrator.store().get();
    let fetches_before = program.fetch_calls();

    program.set_fail_mutations(true);
    orchestrator
        .submit_link(&user, "https://media.giphy.com/new.gif")
        .await
        .unwrap();
    orchestrator.vote(&user, "https://giphy.com/a.gif", true).await;

    // No refetch follows a failed mutation, and the cached items survive.
    assert_eq!(program.fetch_calls(), fetches_before);
    assert_eq!(orchestrator.store().get(), before);
}

#[tokio::test]
async fn voting_on_a_missing_link_is_only_logged() {
    let program = ScriptedProgram::with_items(vec![ListItem::new("https://giphy.com/a.gif")]);
    let orchestrator = SyncOrchestrator::new(&program, ListStateStore::new());

    orchestrator.refresh().await;
    orchestrator
        .vote(&Keypair::new(), "https://giphy.com/missing.gif", true)
        .await;

    assert_eq!(loaded_items(&orchestrator)[0].votes, 0);
}
