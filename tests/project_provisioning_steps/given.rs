//! Given steps for project provisioning BDD scenarios.

use super::world::{ProvisioningWorld, run_async};
use brunel::config::ProvisioningSettings;
use brunel::project::domain::{ProjectKey, ProjectRecord};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("a provisioning service with default policy")]
fn default_policy_service(world: &mut ProvisioningWorld) {
    *world = ProvisioningWorld::new();
}

#[given("a provisioning service that allows platform upgrades")]
fn upgrade_friendly_service(world: &mut ProvisioningWorld) {
    *world = ProvisioningWorld::with_settings(ProvisioningSettings {
        allow_platform_upgrade: true,
        ..ProvisioningSettings::default()
    });
}

#[given(r#"a create request for key "{key}" named "{name}" with a bugtracker space"#)]
fn bugtracker_create_request(
    world: &mut ProvisioningWorld,
    key: String,
    name: String,
) -> Result<(), eyre::Report> {
    let project_key = ProjectKey::new(&key)?;
    world.project_key = Some(project_key.clone());
    world.pending_request =
        Some(ProjectRecord::new(project_key, name).with_bugtracker_space_requested(true));
    Ok(())
}

#[given("the project has already been created")]
fn project_already_created(world: &mut ProvisioningWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .clone()
        .ok_or_else(|| eyre::eyre!("no pending create request in scenario world"))?;
    run_async(world.service.create_project(request))
        .wrap_err("create existing project for duplicate scenario")?;
    Ok(())
}

/// Stores a project through the service for update scenarios.
fn store_project(
    world: &mut ProvisioningWorld,
    key: &str,
    platform_runtime: bool,
) -> Result<(), eyre::Report> {
    let project_key = ProjectKey::new(key)?;
    let request = ProjectRecord::new(project_key.clone(), "Demo Project")
        .with_platform_runtime_requested(platform_runtime);
    run_async(world.service.create_project(request)).wrap_err("store project for scenario")?;
    world.project_key = Some(project_key);
    Ok(())
}

#[given(r#"a stored project "{key}" without a platform runtime"#)]
fn stored_project_without_platform(
    world: &mut ProvisioningWorld,
    key: String,
) -> Result<(), eyre::Report> {
    store_project(world, &key, false)
}

#[given(r#"a stored project "{key}" with a platform runtime"#)]
fn stored_project_with_platform(
    world: &mut ProvisioningWorld,
    key: String,
) -> Result<(), eyre::Report> {
    store_project(world, &key, true)
}
