use app_catalog::{browse, cli, config, error, fetcher, render, storage};
use app_catalog_common::{CatalogState, KeyValueStorage, LAST_SELECTED_APPS_KEY};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{CatalogError, Result};
use fetcher::CatalogSource;
use std::path::Path;
use std::time::Duration;
use storage::FileStorage;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = Config::load()?;

    match cli.command {
        Commands::List { search, page } => {
            let (mut state, _storage) =
                open_catalog(&config, cli.source.as_deref(), cli.storage.as_deref()).await?;

            state.handle_search(&search);
            state.set_page(page);

            println!("{}", render::render_view(&state));
        }

        Commands::Show { app_id } => {
            let (mut state, mut storage) =
                open_catalog(&config, cli.source.as_deref(), cli.storage.as_deref()).await?;

            match state.select_app_by_id(&app_id, Some(&mut storage)) {
                Ok(()) => {}
                Err(app_catalog_common::Error::UnknownApp(id)) => {
                    return Err(CatalogError::AppNotFound(id));
                }
                Err(e) => {
                    // 画面上の選択は反映済み
                    log::warn!("最近表示したアプリの保存に失敗しました: {}", e);
                }
            }

            if let Some(app) = state.selected() {
                println!("{}", render::render_detail(app, state.last_selected()));
            }
        }

        Commands::Recent => {
            let (state, _storage) =
                open_catalog(&config, cli.source.as_deref(), cli.storage.as_deref()).await?;

            println!("最近表示したアプリ:");
            println!("{}", render::render_recent(state.last_selected()));
        }

        Commands::Browse => {
            println!("📇 app-catalog - 対話閲覧\n");
            let (mut state, mut storage) =
                open_catalog(&config, cli.source.as_deref(), cli.storage.as_deref()).await?;

            browse::run_interactive_browse(&mut state, &mut storage)?;
        }

        Commands::Config { set_source, set_page_size, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_source {
                config.set_source_url(url);
                changed = true;
            }

            if let Some(size) = set_page_size {
                config.set_page_size(size)?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  取得元: {}", config.resolve_source(cli.source.as_deref()));
                println!("  ページあたり件数: {}", config.page_size);
                println!("  最近表示の件数: {}", config.recent_limit);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  保存先: {}", config.resolve_storage_path(cli.storage.as_deref())?.display());
            }
        }

        Commands::Storage { clear, info } => {
            let path = config.resolve_storage_path(cli.storage.as_deref())?;

            if info || !clear {
                // デフォルトまたは--info: 情報表示
                if path.exists() {
                    let storage = FileStorage::open(&path);
                    println!("保存データ情報:");
                    println!("  パス: {}", path.display());
                    println!("  キー数: {}", storage.len());
                    if let Some(ids) = storage.get_item(LAST_SELECTED_APPS_KEY) {
                        println!("  {}: {}", LAST_SELECTED_APPS_KEY, ids);
                    }
                    if let Ok(meta) = std::fs::metadata(&path) {
                        println!("  サイズ: {} bytes", meta.len());
                    }
                } else {
                    println!("保存データが存在しません: {}", path.display());
                }
            }

            if clear {
                match FileStorage::clear(&path) {
                    Ok(true) => println!("✔ 保存データを削除しました: {}", path.display()),
                    Ok(false) => println!("保存データが存在しません"),
                    Err(e) => println!("保存データ削除エラー: {}", e),
                }
            }
        }
    }

    Ok(())
}

/// カタログを取得し、保存済みの最近表示したアプリを復元する
async fn open_catalog(
    config: &Config,
    cli_source: Option<&str>,
    cli_storage: Option<&Path>,
) -> Result<(CatalogState, FileStorage)> {
    let source = CatalogSource::parse(&config.resolve_source(cli_source));
    let storage = FileStorage::open(&config.resolve_storage_path(cli_storage)?);

    let apps = fetcher::load_catalog(&source, Duration::from_secs(config.timeout_seconds), true).await;

    let mut state = CatalogState::with_limits(config.page_size, config.recent_limit);
    state.load_apps(apps, Some(&storage));

    Ok((state, storage))
}
