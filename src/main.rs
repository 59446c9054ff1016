use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use carmarket_admin::controller::{ConsoleDialogs, Dialogs, Inquiry, ListController, StatusTab};
use carmarket_admin::models::{
    ArticleStatus, CommentStatus, MemberStatus, PropertyStatus, RecordStatus, RentalStatus,
};
use carmarket_admin::operations::{
    GetAllBoardArticlesByAdmin, GetAllCommentsByAdmin, GetAllMembersByAdmin,
    GetAllPropertiesByAdmin, GetAllRentalsByAdmin, ListQuery, RemoveBoardArticleByAdmin,
    RemoveCommentByAdmin, RemovePropertyByAdmin, RemoveRentalByAdmin,
};
use carmarket_admin::render::{ErrorBoundary, TableRow, TableView};
use carmarket_admin::state::{AppState, PreferenceStore, Theme};
use carmarket_admin::transport::{GraphQlClient, TokenSource, Transport};
use carmarket_admin::Config;

const USAGE: &str = "usage: carmarket-admin [rentals|members|properties|articles|comments] \
[--page N] [--limit N] [--status STATUS] [--remove ID] [--theme light|dark] [--locale CODE]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Rentals,
    Members,
    Properties,
    Articles,
    Comments,
}

#[derive(Debug)]
struct Args {
    page: Page,
    page_number: u32,
    limit: u32,
    status: Option<String>,
    remove: Option<String>,
    theme: Option<Theme>,
    locale: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args {
        page: Page::Rentals,
        page_number: 1,
        limit: 10,
        status: None,
        remove: None,
        theme: None,
        locale: None,
    };

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().with_context(|| format!("{flag} needs a value"));
        match arg.as_str() {
            "rentals" => parsed.page = Page::Rentals,
            "members" => parsed.page = Page::Members,
            "properties" => parsed.page = Page::Properties,
            "articles" => parsed.page = Page::Articles,
            "comments" => parsed.page = Page::Comments,
            "--page" => parsed.page_number = value("--page")?.parse().context("--page")?,
            "--limit" => parsed.limit = value("--limit")?.parse().context("--limit")?,
            "--status" => parsed.status = Some(value("--status")?),
            "--remove" => parsed.remove = Some(value("--remove")?),
            "--locale" => parsed.locale = Some(value("--locale")?),
            "--theme" => {
                parsed.theme = Some(match value("--theme")?.as_str() {
                    "light" => Theme::Light,
                    "dark" => Theme::Dark,
                    other => bail!("unknown theme `{other}`"),
                })
            }
            "-h" | "--help" => bail!(USAGE),
            other => bail!("unexpected argument `{other}`\n{USAGE}"),
        }
    }

    Ok(parsed)
}

fn parse_status<S: RecordStatus + DeserializeOwned>(raw: &str) -> Result<S> {
    serde_json::from_value(Value::String(raw.to_ascii_uppercase())).with_context(|| {
        let known: Vec<&str> = S::ALL.iter().map(|s| s.as_str()).collect();
        format!("unknown status `{raw}`, expected one of {}", known.join(", "))
    })
}

struct Screen {
    transport: Arc<dyn Transport>,
    dialogs: Arc<dyn Dialogs>,
    boundary: ErrorBoundary,
    config: Config,
}

impl Screen {
    fn show<Q>(&self, controller: &ListController<Q>)
    where
        Q: ListQuery,
        Q::Record: TableRow,
    {
        let snapshot = controller.snapshot();
        let assets = self.config.assets();
        let rendered = self
            .boundary
            .render(|| Ok(TableView::from_snapshot(&snapshot, &assets).render()));
        println!("{rendered}");
    }

    /// Mount a list page and print it; `None` when the first load failed.
    async fn open<Q, S>(
        &self,
        args: &Args,
        status_key: &str,
    ) -> Result<Option<ListController<Q>>>
    where
        Q: ListQuery,
        Q::Record: TableRow,
        S: RecordStatus + DeserializeOwned,
    {
        let mut inquiry = Inquiry::new(args.limit);
        if let Some(raw) = &args.status {
            let status: S = parse_status(raw)?;
            inquiry.set_filter(status_key, StatusTab::Only(status).filter_value());
        }
        inquiry.set_page(args.page_number);

        let controller = ListController::<Q>::new(
            Arc::clone(&self.transport),
            Arc::clone(&self.dialogs),
            inquiry,
        );

        if let Err(e) = controller.mount().await {
            println!("{}", self.boundary.render(|| Err(e.into())));
            return Ok(None);
        }
        self.show(&controller);
        Ok(Some(controller))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚗 Car Marketplace Admin");

    let args = parse_args(std::env::args().skip(1))?;
    let config = Config::from_env().context("failed to load configuration")?;

    // Session state: preferences first, then the user behind the stored token
    let state = AppState::new();
    let preferences = PreferenceStore::new(config.preferences_path.clone());
    preferences.restore_into(&state).await;
    if args.theme.is_some() || args.locale.is_some() {
        if let Some(theme) = args.theme {
            state.set_theme(theme);
        }
        if let Some(locale) = &args.locale {
            state.set_locale(locale.as_str());
        }
        preferences.save(&state.preferences()).await?;
        info!("💾 Saved preferences to {}", config.preferences_path.display());
    }

    let client = GraphQlClient::shared(&config, None).await?;
    let token = client.token_source().get_token().await;
    match state.authenticate(token.as_deref()) {
        Some(user) if user.is_admin() => info!("signed in as {}", user.member_nick),
        Some(user) => warn!(
            "{} is not an admin, admin operations will be rejected",
            user.member_nick
        ),
        None => warn!("no access token, requests go out unauthenticated"),
    }
    info!("theme {:?}, locale {}", state.theme(), state.locale());

    let transport: Arc<dyn Transport> = client;
    let screen = Screen {
        transport,
        dialogs: Arc::new(ConsoleDialogs),
        boundary: ErrorBoundary::default(),
        config,
    };

    match args.page {
        Page::Rentals => {
            let page = screen
                .open::<GetAllRentalsByAdmin, RentalStatus>(&args, "rentalStatus")
                .await?;
            if let (Some(controller), Some(id)) = (page, &args.remove) {
                if controller.remove_record::<RemoveRentalByAdmin>(id).await.is_ok() {
                    screen.show(&controller);
                }
            }
        }
        Page::Members => {
            if args.remove.is_some() {
                bail!("members cannot be removed, block them instead");
            }
            screen
                .open::<GetAllMembersByAdmin, MemberStatus>(&args, "memberStatus")
                .await?;
        }
        Page::Properties => {
            let page = screen
                .open::<GetAllPropertiesByAdmin, PropertyStatus>(&args, "propertyStatus")
                .await?;
            if let (Some(controller), Some(id)) = (page, &args.remove) {
                if controller.remove_record::<RemovePropertyByAdmin>(id).await.is_ok() {
                    screen.show(&controller);
                }
            }
        }
        Page::Articles => {
            let page = screen
                .open::<GetAllBoardArticlesByAdmin, ArticleStatus>(&args, "articleStatus")
                .await?;
            if let (Some(controller), Some(id)) = (page, &args.remove) {
                if controller.remove_record::<RemoveBoardArticleByAdmin>(id).await.is_ok() {
                    screen.show(&controller);
                }
            }
        }
        Page::Comments => {
            let page = screen
                .open::<GetAllCommentsByAdmin, CommentStatus>(&args, "commentStatus")
                .await?;
            if let (Some(controller), Some(id)) = (page, &args.remove) {
                if controller.remove_record::<RemoveCommentByAdmin>(id).await.is_ok() {
                    screen.show(&controller);
                }
            }
        }
    }

    Ok(())
}
