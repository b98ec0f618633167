use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::journal::{DecisionResult, MarketCondition, TradeAction};

#[derive(Parser, Debug)]
#[command(name = "decision-journal")]
#[command(version, about = "Log decisions, record how they turned out, and review your track record")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List decisions, newest first
    List {
        /// Only this category (invest, health, study, ...)
        #[arg(long)]
        category: Option<String>,

        /// Only this result (pending, positive, negative, neutral)
        #[arg(long)]
        result: Option<DecisionResult>,
    },

    /// List decisions waiting for an outcome
    Pending,

    /// Show one decision with its track record
    Show {
        /// Decision ID
        id: String,
    },

    /// Log a new decision
    Create {
        /// What was decided
        #[arg(long)]
        title: String,

        /// Category id
        #[arg(long)]
        category: String,

        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        /// Confidence from 1 to 5
        #[arg(long, default_value_t = 3)]
        confidence: u8,

        #[arg(long)]
        notes: Option<String>,

        /// Ticker or asset name (invest only)
        #[arg(long)]
        symbol: Option<String>,

        /// buy or sell (invest only)
        #[arg(long)]
        action: Option<TradeAction>,

        /// bull, bear, sideways, or volatile (invest only)
        #[arg(long)]
        market: Option<MarketCondition>,
    },

    /// Record how a decision turned out
    Resolve {
        /// Decision ID
        id: String,

        /// positive, negative, or neutral
        #[arg(long)]
        result: DecisionResult,

        /// Confidence from 1 to 5; defaults to the stored value
        #[arg(long)]
        confidence: Option<u8>,

        /// Entry price (invest only, commas allowed)
        #[arg(long)]
        entry: Option<String>,

        /// Exit price (invest only, commas allowed)
        #[arg(long)]
        exit: Option<String>,

        /// buy or sell; defaults to the stored action
        #[arg(long)]
        action: Option<TradeAction>,

        #[arg(long)]
        reflection: Option<String>,
    },

    /// Put a resolved decision back to pending
    Revert {
        /// Decision ID
        id: String,
    },

    /// Delete a decision
    Delete {
        /// Decision ID
        id: String,
    },

    /// Statistics overview, or a summary when filtered
    Stats {
        /// Look-back window in days
        #[arg(long)]
        days: Option<u32>,

        /// Only this category
        #[arg(long)]
        category: Option<String>,
    },

    /// This week against last week
    Weekly {
        /// Any day of the week to review (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Result labels of a category, or every category with suggested tags
    Labels {
        category: Option<String>,
    },
}
