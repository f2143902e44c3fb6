/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command Line Interface (CLI) module
//!
//! Inspection helpers for the mode layout and the solver configuration.

use crate::cluster::ClusterConfig;
use crate::vsh::{lmax_to_rmax, mode_indices, rmax_to_lmax};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Generalized multiparticle Mie theory tools
#[derive(Debug, Parser)]
#[command(name = "gmt-rs", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the canonical (r, n, m) mode table
    Modes {
        /// Truncation degree
        #[arg(long)]
        lmax: usize,
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Recover lmax from a mode count
    Lmax {
        /// Number of modes per polarization
        #[arg(long)]
        rmax: usize,
    },
    /// Print or write the default cluster configuration
    Config {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct ModeRow {
    r: usize,
    n: i32,
    m: i32,
}

/// Execute a parsed command, returning the text to print
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Command::Modes { lmax, json } => {
            let rmax = lmax_to_rmax(*lmax)?;
            if *json {
                let rows: Vec<ModeRow> = mode_indices(*lmax)
                    .map(|mode| ModeRow {
                        r: mode.r,
                        n: mode.n,
                        m: mode.m,
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            } else {
                let mut out = format!("lmax={} rmax={}\n{:>5} {:>4} {:>4}\n", lmax, rmax, "r", "n", "m");
                for mode in mode_indices(*lmax) {
                    out.push_str(&format!("{:>5} {:>4} {:>4}\n", mode.r, mode.n, mode.m));
                }
                Ok(out)
            }
        }
        Command::Lmax { rmax } => Ok(format!("{}", rmax_to_lmax(*rmax)?)),
        Command::Config { output } => {
            let config = ClusterConfig::default();
            match output {
                Some(path) => {
                    config.save(path)?;
                    Ok(format!("wrote default configuration to {}", path.display()))
                }
                None => Ok(config.to_json()?),
            }
        }
    }
}
