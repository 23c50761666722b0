pub(super) use crate::{client::*, config::*};
pub(super) use anyhow::{bail, Context, Result};
pub(super) use clap::{Parser, Subcommand};
pub(super) use colored::Colorize;

pub mod completion;
pub mod login;
pub mod logout;
pub mod search;
pub mod whoami;
