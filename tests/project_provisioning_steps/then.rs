//! Then steps for project provisioning BDD scenarios.

use super::world::ProvisioningWorld;
use brunel::project::{
    domain::{ProjectRecord, Quickstarter},
    error::{FailureKind, ProvisioningError},
};
use rstest_bdd_macros::then;

/// Returns the record from the last outcome, failing on errors.
fn last_success(world: &ProvisioningWorld) -> Result<&ProjectRecord, eyre::Report> {
    match world.last_outcome.as_ref() {
        Some(Ok(record)) => Ok(record),
        Some(Err(error)) => Err(eyre::eyre!("expected success, got error: {error}")),
        None => Err(eyre::eyre!("missing provisioning outcome in scenario world")),
    }
}

/// Loads the stored record for the scenario's project key.
fn stored_record(world: &ProvisioningWorld) -> Result<ProjectRecord, eyre::Report> {
    let key = world
        .project_key
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no project key in scenario world"))?;
    world
        .storage
        .stored(key)
        .ok_or_else(|| eyre::eyre!("no stored record for '{key}'"))
}

#[then("the provisioning succeeds")]
fn provisioning_succeeds(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    last_success(world).map(|_| ())
}

#[then("the update succeeds")]
fn update_succeeds(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    last_success(world).map(|_| ())
}

#[then(r#"the stored project key is "{key}""#)]
fn stored_project_key_is(world: &ProvisioningWorld, key: String) -> Result<(), eyre::Report> {
    let record = last_success(world)?;
    if record.key.as_str() != key {
        return Err(eyre::eyre!("expected key '{key}', got '{}'", record.key));
    }
    let stored = stored_record(world)?;
    if stored.key.as_str() != key {
        return Err(eyre::eyre!(
            "expected stored key '{key}', got '{}'",
            stored.key
        ));
    }
    Ok(())
}

#[then("the record links an issue tracker project and a collaboration space")]
fn record_links_tracker_and_space(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    let record = last_success(world)?;
    if !record.has_bugtracker_url() {
        return Err(eyre::eyre!("expected an issue tracker link"));
    }
    if !record.has_collaboration_space_url() {
        return Err(eyre::eyre!("expected a collaboration space link"));
    }
    Ok(())
}

#[then("no source control project is linked")]
fn no_scm_project_linked(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    let record = last_success(world)?;
    if record.has_scm_url() {
        return Err(eyre::eyre!("expected no source control link"));
    }
    if !world.scm.created_projects().is_empty() {
        return Err(eyre::eyre!("expected no source control project"));
    }
    Ok(())
}

#[then("the creation is rejected as a conflict")]
fn creation_rejected_as_conflict(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing provisioning outcome in scenario world"))?;
    match outcome {
        Err(error @ ProvisioningError::AlreadyExists(_))
            if error.kind() == FailureKind::Conflict =>
        {
            Ok(())
        }
        Err(error) => Err(eyre::eyre!("expected an already-exists error, got {error}")),
        Ok(_) => Err(eyre::eyre!("expected the creation to fail")),
    }
}

#[then("only one issue tracker project was created")]
fn only_one_tracker_project(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    let created = world.bugtracker.created_projects();
    if created.len() != 1 {
        return Err(eyre::eyre!(
            "expected one tracker project, found {:?}",
            created
        ));
    }
    Ok(())
}

#[then("the update is rejected as a forbidden upgrade")]
fn update_rejected_as_forbidden_upgrade(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing provisioning outcome in scenario world"))?;
    if !matches!(outcome, Err(ProvisioningError::UpgradeNotAllowed(_))) {
        return Err(eyre::eyre!("expected a forbidden upgrade, got {outcome:?}"));
    }
    Ok(())
}

#[then("the stored record still has no platform runtime")]
fn stored_record_has_no_platform(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    let stored = stored_record(world)?;
    if stored.platform_runtime_requested {
        return Err(eyre::eyre!("expected the stored record to stay off-platform"));
    }
    if !world.scm.created_projects().is_empty() {
        return Err(eyre::eyre!("expected no source control project"));
    }
    Ok(())
}

#[then("the stored record links a source control project")]
fn stored_record_links_scm(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    let stored = stored_record(world)?;
    if !stored.has_scm_url() {
        return Err(eyre::eyre!("expected a source control link"));
    }
    Ok(())
}

#[then(r#"the stored project lists the quickstarter types "{types}""#)]
fn stored_quickstarter_types(
    world: &ProvisioningWorld,
    types: String,
) -> Result<(), eyre::Report> {
    let stored = stored_record(world)?;
    let expected: Vec<&str> = types.split(',').map(str::trim).collect();
    let actual: Vec<&str> = stored
        .quickstarters
        .iter()
        .filter_map(Quickstarter::component_type)
        .collect();
    if actual != expected {
        return Err(eyre::eyre!(
            "expected quickstarter types {expected:?}, got {actual:?}"
        ));
    }
    Ok(())
}

#[then("every provisioning session was released")]
fn every_session_released(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    if !world.sessions.balanced() {
        return Err(eyre::eyre!(
            "expected balanced sessions, issued {} released {}",
            world.sessions.issued_count(),
            world.sessions.released_count()
        ));
    }
    Ok(())
}
