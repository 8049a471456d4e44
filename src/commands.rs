use crate::cli::Command;
use crate::collection::BrandCollection;
use crate::config::AppConfig;
use crate::http::spinner;
use crate::output::print_load_warnings;
use crate::session::{IdentityStore, User};
use crate::store::HttpRecordStore;

pub mod add;
pub mod auth;
pub mod browse;
pub mod edit;
pub mod learn;
pub mod list;
pub mod quiz;
pub mod remove;
pub mod show;
pub mod stats;

/// コマンド共通の実行コンテキスト
pub struct Context {
    pub config: AppConfig,
    pub store: HttpRecordStore,
    pub identity: IdentityStore,
}

impl Context {
    pub fn new(api_url: Option<&str>) -> Result<Self, String> {
        let config = AppConfig::resolve(api_url).map_err(|e| e.to_string())?;
        tracing::debug!(api_url = %config.api_url, data_dir = %config.data_dir.display(), "resolved config");
        let store = HttpRecordStore::from_config(&config);
        let identity = IdentityStore::new(&config.data_dir);
        tracing::debug!(account_file = %identity.path().display(), "identity store");
        Ok(Self {
            config,
            store,
            identity,
        })
    }

    /// サインイン中のユーザー
    pub fn current_user(&self) -> Result<Option<User>, String> {
        self.identity.current().map_err(|e| e.to_string())
    }

    /// ストアから一覧を読み込む（警告は stderr に出す）
    pub async fn load_collection(&self, quiet: bool) -> BrandCollection {
        let pb = if quiet {
            indicatif::ProgressBar::hidden()
        } else {
            spinner("Loading brands...")
        };
        let (collection, report) = BrandCollection::load(&self.store).await;
        pb.finish_and_clear();
        tracing::debug!(
            loaded = report.loaded,
            quarantined = report.quarantined.len(),
            "loaded brands"
        );
        print_load_warnings(&report);
        collection
    }
}

pub async fn dispatch(cli: crate::cli::Cli) -> Result<(), String> {
    let context = || Context::new(cli.api_url.as_deref());
    match cli.command {
        Command::List(args) => list::run(args, &context()?).await,
        Command::Show(args) => show::run(args, &context()?).await,
        Command::Stats(args) => stats::run(args, &context()?).await,
        Command::Add(args) => add::run(args, &context()?).await,
        Command::Edit(args) => edit::run(args, &context()?).await,
        Command::Remove(args) => remove::run(args, &context()?).await,
        Command::Auth(args) => auth::run(args, &context()?),
        Command::Learn => learn::run(),
        Command::Quiz(args) => quiz::run(args),
        Command::Browse => browse::run(&context()?).await,
    }
}
