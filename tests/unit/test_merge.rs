use workflow_factory::core::generator::{merge_permissions, merge_secrets};
use workflow_factory::core::types::{PermissionDef, PermissionLevel, PermissionScope, SecretDef};

fn secret(name: &str, description: &str) -> SecretDef {
    SecretDef {
        name: name.to_string(),
        description: description.to_string(),
        required: true,
        example: None,
    }
}

fn permission(scope: PermissionScope, level: PermissionLevel, reason: &str) -> PermissionDef {
    PermissionDef {
        scope,
        level,
        reason: reason.to_string(),
    }
}

#[test]
fn secrets_merge_keeps_first_definition_per_name() {
    let merged = merge_secrets(&[
        vec![secret("API_TOKEN", "first description")],
        vec![secret("API_TOKEN", "second description")],
    ]);

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].description, "first description");
}

#[test]
fn secrets_merge_preserves_encounter_order() {
    let merged = merge_secrets(&[
        vec![secret("ZETA", "z"), secret("ALPHA", "a")],
        vec![secret("MIDDLE", "m"), secret("ZETA", "dup")],
    ]);

    let names: Vec<&str> = merged.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["ZETA", "ALPHA", "MIDDLE"]);
}

#[test]
fn secrets_merge_of_empty_input_is_empty() {
    assert!(merge_secrets(&[]).is_empty());
    assert!(merge_secrets(&[Vec::new(), Vec::new()]).is_empty());
}

#[test]
fn permissions_merge_takes_highest_level_per_scope() {
    let merged = merge_permissions(&[
        vec![permission(
            PermissionScope::Contents,
            PermissionLevel::Read,
            "clone the repository",
        )],
        vec![permission(
            PermissionScope::Contents,
            PermissionLevel::Write,
            "push release commits",
        )],
    ]);

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].level, PermissionLevel::Write);
    assert_eq!(merged[0].reason, "push release commits");
}

#[test]
fn permissions_merge_tie_keeps_first_reason() {
    let merged = merge_permissions(&[
        vec![permission(
            PermissionScope::Packages,
            PermissionLevel::Write,
            "first reason",
        )],
        vec![permission(
            PermissionScope::Packages,
            PermissionLevel::Write,
            "second reason",
        )],
    ]);

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].reason, "first reason");
}

#[test]
fn permissions_merge_lower_level_never_downgrades() {
    let merged = merge_permissions(&[
        vec![permission(
            PermissionScope::IdToken,
            PermissionLevel::Write,
            "oidc deploy",
        )],
        vec![permission(
            PermissionScope::IdToken,
            PermissionLevel::None,
            "attempted downgrade",
        )],
    ]);

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].level, PermissionLevel::Write);
    assert_eq!(merged[0].reason, "oidc deploy");
}

#[test]
fn permissions_merge_upgrade_keeps_first_seen_scope_order() {
    let merged = merge_permissions(&[
        vec![
            permission(PermissionScope::Contents, PermissionLevel::Read, "checkout"),
            permission(PermissionScope::Pages, PermissionLevel::Write, "deploy"),
        ],
        // Upgrading contents must not move it behind pages.
        vec![permission(
            PermissionScope::Contents,
            PermissionLevel::Write,
            "tag release",
        )],
    ]);

    let scopes: Vec<PermissionScope> = merged.iter().map(|p| p.scope).collect();
    assert_eq!(scopes, vec![PermissionScope::Contents, PermissionScope::Pages]);
    assert_eq!(merged[0].level, PermissionLevel::Write);
}

#[test]
fn permission_level_ranks_none_read_write() {
    assert!(PermissionLevel::None.rank() < PermissionLevel::Read.rank());
    assert!(PermissionLevel::Read.rank() < PermissionLevel::Write.rank());
}
