// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::core::ApiClient;
use crate::insights::{insights_for, summarize_competitors, RandomPlaceholders};
use crate::types::{
    CompanyRecord, CompetitorRecord, CompetitorSummary, ExportFormat, ExportPayload, InsightBundle,
};

#[derive(Parser)]
#[command(name = "company-research")]
#[command(about = "Query the company research analysis service")]
pub struct ResearchCli {
    #[command(subcommand)]
    pub command: ResearchCommand,

    /// Override the service base URL from the environment
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum ResearchCommand {
    /// Analyze a company and print the record with reconciled insights
    Analyze {
        company: String,
        #[arg(long = "competitor")]
        competitors: Vec<String>,
    },
    /// Fetch service-computed insights
    Insights { company: String },
    /// Compare several companies
    Compare {
        #[arg(required = true)]
        companies: Vec<String>,
    },
    /// Export company data as pdf, csv or json
    Export {
        company: String,
        #[arg(long, default_value = "json")]
        format: String,
        /// Write to this file. JSON goes to stdout without it; binary
        /// formats default to `<company>.<format>`
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Recent company posts
    Posts {
        company: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Open job postings
    Jobs {
        company: String,
        #[arg(long)]
        department: Option<String>,
    },
    /// Check that the service is reachable
    Health,
}

#[derive(Serialize)]
struct AnalysisOutput {
    company: CompanyRecord,
    insights: InsightBundle,
}

#[derive(Serialize)]
struct ComparisonOutput {
    competitors: Vec<CompetitorRecord>,
    summary: Option<CompetitorSummary>,
}

/// File name for a binary export when none was given, e.g. `Acme_Corp.pdf`
fn default_export_path(company: &str, format: ExportFormat) -> PathBuf {
    let stem: String = company
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    PathBuf::from(format!("{}.{}", stem, format.extension()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}

pub async fn handle_research_command(client: &ApiClient, command: ResearchCommand) -> Result<()> {
    match command {
        ResearchCommand::Analyze {
            company,
            competitors,
        } => {
            let record = client.analyze_company(&company, &competitors).await?;
            let insights = insights_for(&record, &RandomPlaceholders);
            print_json(&AnalysisOutput {
                company: record,
                insights,
            })
        }

        ResearchCommand::Insights { company } => print_json(&client.get_insights(&company).await?),

        ResearchCommand::Compare { companies } => {
            let competitors = client.get_competitor_comparison(&companies).await?;
            let summary = summarize_competitors(&competitors);
            print_json(&ComparisonOutput {
                competitors,
                summary,
            })
        }

        ResearchCommand::Export {
            company,
            format,
            output,
        } => {
            let payload = client.export_data(&company, &format).await?;
            let path = match (output, &payload) {
                (Some(path), _) => path,
                (None, ExportPayload::Json(value)) => return print_json(value),
                (None, ExportPayload::Binary(_)) => default_export_path(&company, format.parse()?),
            };

            let bytes = payload
                .into_bytes()
                .context("Failed to encode export payload")?;
            tokio::fs::write(&path, &bytes)
                .await
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            info!("Wrote {} bytes to {}", bytes.len(), path.display());
            Ok(())
        }

        ResearchCommand::Posts { company, limit } => {
            print_json(&client.get_company_posts(&company, limit).await?)
        }

        ResearchCommand::Jobs {
            company,
            department,
        } => print_json(
            &client
                .get_company_jobs(&company, department.as_deref())
                .await?,
        ),

        ResearchCommand::Health => {
            if client.test_connection().await {
                println!("ok {}", client.base_url());
                Ok(())
            } else {
                anyhow::bail!("Service at {} is unreachable", client.base_url())
            }
        }
    }
}
