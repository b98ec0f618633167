//! Executes a parsed command against a `DecisionApi`.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};

use super::{Cli, Commands};
use crate::application::{
    CreateDecisionCommand, CreateDecisionHandler, DeleteDecisionCommand, DeleteDecisionHandler,
    GetDecisionHandler, GetDecisionInsightHandler, GetDecisionInsightQuery, GetDecisionQuery,
    GetStatsOverviewHandler, GetSummaryHandler, GetWeeklyReviewHandler, GetWeeklyReviewQuery,
    ListDecisionsHandler, ListDecisionsQuery, ListPendingHandler, RevertOutcomeCommand,
    RevertOutcomeHandler, ScreenLoader, SubmitOutcomeCommand, SubmitOutcomeHandler, UserNotice,
    ViewState,
};
use crate::config::DisplayConfig;
use crate::domain::analysis::SummaryQuery;
use crate::domain::foundation::{Confidence, DecisionId, ValidationError};
use crate::domain::journal::{
    CategoryId, CategoryRegistry, DecisionDraft, DecisionMeta, InvestMeta, TagSelection, TagToggle,
    Tags, PENDING_LABEL, SUGGESTED_TAGS,
};
use crate::domain::outcome::OutcomeForm;
use crate::ports::DecisionApi;

/// Runs `cli` and returns the JSON to print, or the notice to show.
pub async fn run(cli: Cli, api: Arc<dyn DecisionApi>, display: &DisplayConfig) -> Result<Value, UserNotice> {
    let mut loader = ScreenLoader::new();
    let ticket = loader.begin();
    let outcome = execute(cli.command, api, display).await;
    loader.complete(ticket, outcome);

    match loader.into_state() {
        ViewState::Ready(value) => Ok(value),
        ViewState::Failed(notice) => Err(notice),
        ViewState::Loading => Err(UserNotice::error("The command produced no result.")),
    }
}

async fn execute(command: Commands, api: Arc<dyn DecisionApi>, display: &DisplayConfig) -> Result<Value, UserNotice> {
    match command {
        Commands::List { category, result } => {
            let query = ListDecisionsQuery {
                category_id: category.map(CategoryId::new).transpose().map_err(notice)?,
                result,
            };
            let decisions = ListDecisionsHandler::new(api)
                .handle(query)
                .await
                .map_err(|e| UserNotice::from(&e))?;
            render(&decisions)
        }

        Commands::Pending => {
            let pending = ListPendingHandler::new(api)
                .handle()
                .await
                .map_err(|e| UserNotice::from(&e))?;
            render(&pending)
        }

        Commands::Show { id } => {
            let detail = GetDecisionInsightHandler::new(api)
                .handle(GetDecisionInsightQuery {
                    decision_id: parse_id(&id)?,
                })
                .await
                .map_err(|e| UserNotice::from(&e))?;
            render(&detail)
        }

        Commands::Create {
            title,
            category,
            tags,
            confidence,
            notes,
            symbol,
            action,
            market,
        } => {
            let category_id = CategoryId::new(category.as_str()).map_err(notice)?;
            let meta = (category_id.is_invest() && (symbol.is_some() || action.is_some() || market.is_some()))
                .then(|| {
                    DecisionMeta::Invest(InvestMeta {
                        symbol,
                        action,
                        market_condition: market,
                        ..InvestMeta::default()
                    })
                });
            let draft = DecisionDraft {
                category_id: category,
                title,
                notes,
                tags: capped_tags(tags.as_deref().unwrap_or_default(), display.tag_selection_cap),
                confidence: Confidence::try_new(confidence).map_err(notice)?,
                meta,
            };
            let created = CreateDecisionHandler::new(api)
                .handle(CreateDecisionCommand { draft })
                .await
                .map_err(|e| UserNotice::from(&e))?;
            render(&created)
        }

        Commands::Resolve {
            id,
            result,
            confidence,
            entry,
            exit,
            action,
            reflection,
        } => {
            let decision = GetDecisionHandler::new(api.clone())
                .handle(GetDecisionQuery {
                    decision_id: parse_id(&id)?,
                })
                .await
                .map_err(|e| UserNotice::from(&e))?;

            let mut form = OutcomeForm::prefilled(&decision);
            form.result = Some(result);
            if let Some(level) = confidence {
                form.confidence = Confidence::try_new(level).map_err(notice)?;
            }
            if let Some(entry) = entry {
                form.entry_price = entry;
            }
            if let Some(exit) = exit {
                form.exit_price = exit;
            }
            if action.is_some() {
                form.action = action;
            }
            if reflection.is_some() {
                form.reflection = reflection;
            }

            let updated = SubmitOutcomeHandler::new(api)
                .handle(SubmitOutcomeCommand { decision, form })
                .await
                .map_err(|e| UserNotice::from(&e))?;
            render(&updated)
        }

        Commands::Revert { id } => {
            let decision_id = parse_id(&id)?;
            let decision = GetDecisionHandler::new(api.clone())
                .handle(GetDecisionQuery {
                    decision_id: decision_id.clone(),
                })
                .await
                .map_err(|e| UserNotice::from(&e))?;
            let reverted = RevertOutcomeHandler::new(api)
                .handle(RevertOutcomeCommand {
                    decision_id,
                    confidence: decision.confidence(),
                })
                .await
                .map_err(|e| UserNotice::from(&e))?;
            render(&reverted)
        }

        Commands::Delete { id } => {
            let ack = DeleteDecisionHandler::new(api)
                .handle(DeleteDecisionCommand {
                    decision_id: parse_id(&id)?,
                })
                .await
                .map_err(|e| UserNotice::from(&e))?;
            render(&ack)
        }

        Commands::Stats { days, category } => {
            if days.is_none() && category.is_none() {
                let overview = GetStatsOverviewHandler::new(api)
                    .handle()
                    .await
                    .map_err(|e| UserNotice::from(&e))?;
                return render(&overview);
            }
            let query = SummaryQuery {
                days,
                category_id: category.map(CategoryId::new).transpose().map_err(notice)?,
                limit: None,
            };
            let summary = GetSummaryHandler::new(api)
                .with_defaults(display.summary_days, display.top_tags_limit)
                .handle(query)
                .await
                .map_err(|e| UserNotice::from(&e))?;
            render(&summary)
        }

        Commands::Weekly { date } => {
            let day = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let review = GetWeeklyReviewHandler::new(api)
                .handle(GetWeeklyReviewQuery { day })
                .await
                .map_err(|e| UserNotice::from(&e))?;
            render(&review)
        }

        Commands::Labels { category } => Ok(labels(category.as_deref())),
    }
}

/// Applies the tag picker's cap; tags past it are dropped.
fn capped_tags(raw: &str, cap: usize) -> Tags {
    let mut selection = TagSelection::new(cap);
    for tag in Tags::parse(raw).iter() {
        if selection.toggle(tag) == TagToggle::CapReached {
            tracing::warn!(tag, cap, "Tag limit reached, ignoring tag");
        }
    }
    selection.into_tags()
}

fn labels(category: Option<&str>) -> Value {
    let registry = CategoryRegistry::builtin();
    match category {
        Some(id) => json!({
            "categoryId": id,
            "name": registry.display_name(id),
            "pending": PENDING_LABEL,
            "labels": registry.labels_for(id),
        }),
        None => json!({
            "categories": registry.categories(),
            "suggestedTags": SUGGESTED_TAGS,
        }),
    }
}

fn parse_id(raw: &str) -> Result<DecisionId, UserNotice> {
    DecisionId::new(raw).map_err(notice)
}

fn notice(err: ValidationError) -> UserNotice {
    UserNotice::from(&err)
}

fn render<T: Serialize>(value: &T) -> Result<Value, UserNotice> {
    serde_json::to_value(value)
        .map_err(|e| UserNotice::error("Could not render the result.").with_detail(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryDecisionApi;
    use crate::application::NoticeKind;
    use crate::domain::foundation::UserId;
    use clap::Parser;

    fn api() -> Arc<dyn DecisionApi> {
        Arc::new(InMemoryDecisionApi::new(UserId::new("cli-user").unwrap()))
    }

    async fn exec(api: &Arc<dyn DecisionApi>, args: &[&str]) -> Result<Value, UserNotice> {
        let mut argv = vec!["decision-journal"];
        argv.extend_from_slice(args);
        run(Cli::parse_from(argv), api.clone(), &DisplayConfig::default()).await
    }

    #[test]
    fn sixth_tag_is_dropped_at_cap_five() {
        let tags = capped_tags("a, b, c, d, e, f", 5);
        assert_eq!(tags.len(), 5);
        assert!(!tags.contains("f"));
    }

    #[test]
    fn unknown_category_gets_generic_labels() {
        let value = labels(Some("hobby"));
        assert_eq!(value["labels"]["positive"], "긍정");
        assert_eq!(value["pending"], PENDING_LABEL);
    }

    #[test]
    fn all_labels_include_suggested_tags() {
        let value = labels(None);
        assert!(value["categories"].as_array().is_some_and(|c| !c.is_empty()));
        assert_eq!(value["suggestedTags"][0], SUGGESTED_TAGS[0]);
    }

    #[tokio::test]
    async fn create_resolve_and_revert() {
        let api = api();
        let created = exec(&api, &["create", "--title", "Buy ETF", "--category", "invest", "--action", "buy"])
            .await
            .unwrap();
        assert_eq!(created["result"], "pending");
        let id = created["id"].as_str().unwrap().to_string();

        let resolved = exec(
            &api,
            &["resolve", &id, "--result", "positive", "--entry", "72,000", "--exit", "76,000"],
        )
        .await
        .unwrap();
        assert_eq!(resolved["meta"]["returnRate"], 5.6);
        assert!(resolved.get("resolvedAt").is_some());

        let reverted = exec(&api, &["revert", &id]).await.unwrap();
        assert_eq!(reverted["result"], "pending");
        assert!(reverted.get("resolvedAt").is_none());
    }

    #[tokio::test]
    async fn missing_price_is_an_info_notice() {
        let api = api();
        let created = exec(&api, &["create", "--title", "Sell", "--category", "invest"])
            .await
            .unwrap();
        let id = created["id"].as_str().unwrap().to_string();

        let notice = exec(&api, &["resolve", &id, "--result", "negative"]).await.unwrap_err();
        assert_eq!(notice.kind, NoticeKind::Info);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_notice() {
        let notice = exec(&api(), &["show", "d-404"]).await.unwrap_err();
        assert_eq!(notice.kind, NoticeKind::NotFound);
    }

    #[tokio::test]
    async fn weekly_at_calendar_edge_is_an_info_notice() {
        let notice = exec(&api(), &["weekly", "--date", "+262142-12-31"]).await.unwrap_err();
        assert_eq!(notice.kind, NoticeKind::Info);
    }
}
