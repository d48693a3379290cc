//! Unit tests for the leftover-resource lister and the cleanup command.

#![allow(clippy::expect_used)]

use groundwork_cli::application::services::leftovers::Groups;
use groundwork_cli::commands::cleanup;
use groundwork_cli::domain::Deletable;
use groundwork_cli::output::OutputContext;

use crate::mocks::{ConfirmIf, GroupsClientStub, accept_all, decline_all};

fn names<D: Deletable>(resources: &[D]) -> Vec<&str> {
    resources.iter().map(Deletable::name).collect()
}

fn quiet_ctx() -> OutputContext {
    OutputContext::new(true, true)
}

// ── Listing ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn lists_confirmed_groups_in_provider_order() {
    let client = GroupsClientStub::with_names(&["env-one", "env-two", "unrelated"]);
    let prompter = accept_all();

    let resources = Groups::new(&client, &prompter)
        .list("env")
        .await
        .expect("list");

    assert_eq!(names(&resources), vec!["env-one", "env-two"]);
    assert_eq!(client.list_calls(), vec![(String::new(), None)]);
}

#[tokio::test]
async fn empty_filter_matches_everything() {
    let client = GroupsClientStub::with_names(&["alpha", "beta"]);
    let prompter = accept_all();

    let resources = Groups::new(&client, &prompter)
        .list("")
        .await
        .expect("list");

    assert_eq!(names(&resources), vec!["alpha", "beta"]);
}

#[tokio::test]
async fn filtered_out_groups_are_never_prompted_for() {
    let client = GroupsClientStub::with_names(&["env-one", "unrelated"]);
    let prompter = accept_all();

    Groups::new(&client, &prompter)
        .list("env")
        .await
        .expect("list");

    assert_eq!(
        prompter.calls(),
        vec![("resource group".to_string(), "env-one".to_string())]
    );
}

#[tokio::test]
async fn declining_every_prompt_yields_an_empty_result() {
    let client = GroupsClientStub::with_names(&["env-one", "env-two"]);
    let prompter = decline_all();

    let resources = Groups::new(&client, &prompter)
        .list("")
        .await
        .expect("declines are not errors");

    assert!(resources.is_empty());
}

#[tokio::test]
async fn a_partial_confirmation_keeps_only_the_accepted_groups() {
    let client = GroupsClientStub::with_names(&["keep-one", "drop-two", "keep-three"]);
    let prompter = ConfirmIf::new(|name: &str| name.starts_with("keep"));

    let resources = Groups::new(&client, &prompter)
        .list("")
        .await
        .expect("list");

    assert_eq!(names(&resources), vec!["keep-one", "keep-three"]);
}

#[tokio::test]
async fn a_listing_failure_names_the_resource_kind() {
    let client = GroupsClientStub::failing_list("kumquat");
    let prompter = accept_all();

    let err = Groups::new(&client, &prompter)
        .list("")
        .await
        .expect_err("expected listing error");

    assert_eq!(err.to_string(), "Listing resource groups: kumquat");
}

// ── Deletion through the handles ──────────────────────────────────────────────

#[tokio::test]
async fn deletion_forwards_the_group_name_to_the_client() {
    let client = GroupsClientStub::with_names(&["env-one"]);
    let prompter = accept_all();

    let resources = Groups::new(&client, &prompter)
        .list("")
        .await
        .expect("list");
    resources[0].delete().await.expect("delete");

    assert_eq!(client.deleted_names(), vec!["env-one"]);
}

// ── Cleanup command ───────────────────────────────────────────────────────────

#[tokio::test]
async fn cleanup_deletes_every_confirmed_group() {
    let client = GroupsClientStub::with_names(&["env-one", "env-two", "unrelated"]);
    let prompter = accept_all();

    cleanup::run(&quiet_ctx(), &client, &prompter, "env")
        .await
        .expect("cleanup");

    assert_eq!(client.deleted_names(), vec!["env-one", "env-two"]);
}

#[tokio::test]
async fn cleanup_with_no_matches_succeeds_and_deletes_nothing() {
    let client = GroupsClientStub::with_names(&["alpha"]);
    let prompter = accept_all();

    cleanup::run(&quiet_ctx(), &client, &prompter, "zzz")
        .await
        .expect("empty match is success");

    assert!(client.deleted_names().is_empty());
}

#[tokio::test]
async fn cleanup_reports_deletion_failures_after_trying_every_group() {
    let client = GroupsClientStub {
        delete_error: Some("quota"),
        ..GroupsClientStub::with_names(&["env-one", "env-two"])
    };
    let prompter = accept_all();

    let err = cleanup::run(&quiet_ctx(), &client, &prompter, "")
        .await
        .expect_err("expected failed deletions to surface");

    assert_eq!(err.to_string(), "2 deletion(s) failed");
}
