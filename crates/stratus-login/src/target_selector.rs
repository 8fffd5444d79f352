//! Organization and space targeting after authentication.
//!
//! Resolution order per stage: explicit name, then auto-target a single
//! candidate, then an interactive menu. A typed non-numeric menu answer is
//! taken as a literal name and only checked by the later find-by-name call.

use stratus_config::SessionConfig;
use stratus_core::{Directory, LoginError, Organization, Space, Terminal};

pub const MAX_TARGET_CHOICES: usize = 50;
pub const ORG_LIST_PROMPT: &str = "Select an org (or press enter to skip):";
pub const SPACE_LIST_PROMPT: &str = "Select a space (or press enter to skip):";
pub const TOO_MANY_CHOICES_MESSAGE: &str =
    "There are too many options to display, please type in the name.";

/// Outcome of one interactive menu round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameChoice {
    Picked(String),
    Skipped,
}

/// Shows the menu until the user picks an index, types a name, or presses
/// enter. Out-of-range numbers re-prompt.
pub fn prompt_for_name(
    names: &[String],
    list_prompt: &str,
    item_prompt: &str,
    terminal: &mut dyn Terminal,
) -> Result<NameChoice, LoginError> {
    loop {
        terminal.say(list_prompt);
        if names.len() < MAX_TARGET_CHOICES {
            for (index, name) in names.iter().enumerate() {
                terminal.say(&format!("{}. {}", index + 1, name));
            }
        } else {
            terminal.say(TOO_MANY_CHOICES_MESSAGE);
        }

        let answer = terminal.ask(item_prompt)?;
        if answer.is_empty() {
            return Ok(NameChoice::Skipped);
        }
        match answer.parse::<i64>() {
            Ok(index) if index >= 1 && (index as usize) <= names.len() => {
                return Ok(NameChoice::Picked(names[index as usize - 1].clone()));
            }
            Ok(index) => {
                tracing::debug!(index, choices = names.len(), "menu index out of range");
            }
            Err(_) => return Ok(NameChoice::Picked(answer)),
        }
    }
}

fn requested_name(name_override: Option<&str>) -> Option<&str> {
    name_override.filter(|name| !name.is_empty())
}

fn target_organization(
    config: &mut SessionConfig,
    organization: Organization,
    terminal: &mut dyn Terminal,
) {
    terminal.say(&format!("Targeted org {}\n", organization.name));
    tracing::info!(org = %organization.name, "organization targeted");
    config.set_organization(organization);
}

fn target_space(config: &mut SessionConfig, space: Space, terminal: &mut dyn Terminal) {
    terminal.say(&format!("Targeted space {}\n", space.name));
    tracing::info!(space = %space.name, "space targeted");
    config.set_space(space);
}

/// Resolves and targets an organization. `Ok(false)` means no org was
/// targeted and the space stage should be skipped.
pub fn select_organization(
    name_override: Option<&str>,
    directory: &dyn Directory,
    config: &mut SessionConfig,
    terminal: &mut dyn Terminal,
) -> Result<bool, LoginError> {
    let name = match requested_name(name_override) {
        Some(name) => name.to_string(),
        None => {
            let mut organizations = directory
                .list_organizations(&config.connection(), MAX_TARGET_CHOICES)
                .map_err(LoginError::OrganizationListing)?;
            match organizations.len() {
                0 => return Ok(false),
                1 => {
                    let organization = organizations.remove(0);
                    target_organization(config, organization, terminal);
                    return Ok(true);
                }
                _ => {
                    let names = organizations
                        .into_iter()
                        .map(|organization| organization.name)
                        .collect::<Vec<_>>();
                    match prompt_for_name(&names, ORG_LIST_PROMPT, "Org", terminal)? {
                        NameChoice::Picked(name) => name,
                        NameChoice::Skipped => {
                            terminal.say("");
                            return Ok(false);
                        }
                    }
                }
            }
        }
    };

    let organization = directory
        .find_organization_by_name(&config.connection(), &name)
        .map_err(|source| LoginError::OrganizationNotFound {
            name: name.clone(),
            source,
        })?;
    target_organization(config, organization, terminal);
    Ok(true)
}

/// Resolves and targets a space inside the targeted organization. Without a
/// targeted organization nothing happens.
pub fn select_space(
    name_override: Option<&str>,
    directory: &dyn Directory,
    config: &mut SessionConfig,
    terminal: &mut dyn Terminal,
) -> Result<bool, LoginError> {
    let Some(organization) = config.organization.clone() else {
        return Ok(false);
    };

    let name = match requested_name(name_override) {
        Some(name) => name.to_string(),
        None => {
            let mut spaces = directory
                .list_spaces(&config.connection(), &organization, MAX_TARGET_CHOICES)
                .map_err(LoginError::SpaceListing)?;
            match spaces.len() {
                0 => return Ok(false),
                1 => {
                    let space = spaces.remove(0);
                    target_space(config, space, terminal);
                    return Ok(true);
                }
                _ => {
                    let names = spaces
                        .into_iter()
                        .map(|space| space.name)
                        .collect::<Vec<_>>();
                    match prompt_for_name(&names, SPACE_LIST_PROMPT, "Space", terminal)? {
                        NameChoice::Picked(name) => name,
                        NameChoice::Skipped => {
                            terminal.say("");
                            return Ok(false);
                        }
                    }
                }
            }
        }
    };

    let space = directory
        .find_space_by_name(&config.connection(), &organization, &name)
        .map_err(|source| LoginError::SpaceNotFound {
            name: name.clone(),
            source,
        })?;
    target_space(config, space, terminal);
    Ok(true)
}
