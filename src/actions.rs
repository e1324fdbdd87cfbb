//! Action dispatch: mapping an activated menu item to its system effect.
//!
//! Reboot and power-off go through the platform power-state service and are
//! fire-and-forget: on success the OS terminates this process, so the calls
//! are never expected to return control. The dispatcher therefore also stops
//! the frame loop after issuing one, so nothing renders while the system goes
//! down. Cancel is a plain exit request with no system call.

use std::process::Command;

use anyhow::{Context, Result};

use crate::menu::MenuAction;
use crate::state::AppState;

/// Seam to the platform power-state service.
///
/// The production implementation hands control to the OS; tests substitute a
/// recording implementation.
pub trait PowerControl {
    /// Request a shutdown-with-reboot.
    ///
    /// On success the OS terminates the process; this call does not return
    /// control in that case.
    fn reboot(&mut self) -> Result<()>;

    /// Request a shutdown-without-reboot. Same postcondition as [`reboot`].
    ///
    /// [`reboot`]: PowerControl::reboot
    fn power_off(&mut self) -> Result<()>;
}

/// Power control backed by the system's power-state commands.
pub struct SystemPower;

impl PowerControl for SystemPower {
    fn reboot(&mut self) -> Result<()> {
        tracing::info!("requesting system reboot");
        Command::new("reboot").status().context("issuing reboot")?;
        Ok(())
    }

    fn power_off(&mut self) -> Result<()> {
        tracing::info!("requesting system power-off");
        Command::new("poweroff").status().context("issuing poweroff")?;
        Ok(())
    }
}

/// Dispatch an activated action.
///
/// Every branch ends the loop: power actions because the OS is about to kill
/// the process (and nothing must render in the meantime), Cancel because that
/// is the point of it. A failure from the power service is logged; there is no
/// recovery path, the loop stops either way.
pub fn dispatch(
    action: MenuAction,
    state: &mut AppState,
    power: &mut dyn PowerControl,
) {
    match action {
        MenuAction::Reboot => {
            if let Err(err) = power.reboot() {
                tracing::error!("reboot request failed: {err:#}");
            }
            state.running = false;
        }
        MenuAction::PowerOff => {
            if let Err(err) = power.power_off() {
                tracing::error!("power-off request failed: {err:#}");
            }
            state.running = false;
        }
        MenuAction::RequestExit => {
            tracing::info!("exit requested from menu");
            state.running = false;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
