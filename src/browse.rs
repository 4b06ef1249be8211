//! 対話式カタログ閲覧モジュール
//!
//! 検索・ページ送り・詳細表示を1画面ずつ端末に表示し、コマンドを受け付ける。

use crate::error::{CatalogError, Result};
use crate::render;
use app_catalog_common::{App, CatalogState, KeyValueStorage};
use dialoguer::Input;

const HELP: &str =
    "操作: [/文字]検索 [/]検索解除 [n]次へ [p]前へ [g N]ページ移動 [N]詳細 [r N]最近表示 [c]閉じる [q]終了";

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// 検索文字列を設定（空なら解除）
    Search(String),
    NextPage,
    PrevPage,
    /// 指定ページへ移動
    GoToPage(usize),
    /// 現在ページのN番目を表示
    Open(usize),
    /// 最近表示したアプリのN番目を表示
    OpenRecent(usize),
    /// 詳細を閉じる
    CloseDetail,
    /// 終了
    Quit,
    Unknown(String),
}

/// 入力文字列をアクションに変換
pub fn parse_browse_action(input: &str) -> BrowseAction {
    let trimmed = input.trim();

    if let Some(term) = trimmed.strip_prefix('/') {
        return BrowseAction::Search(term.trim().to_string());
    }

    match trimmed {
        "" | "q" | "Q" => return BrowseAction::Quit,
        "n" | ">" => return BrowseAction::NextPage,
        "p" | "<" => return BrowseAction::PrevPage,
        "c" => return BrowseAction::CloseDetail,
        _ => {}
    }

    if let Some(rest) = trimmed.strip_prefix("g ") {
        return match rest.trim().parse() {
            Ok(page) => BrowseAction::GoToPage(page),
            Err(_) => BrowseAction::Unknown(trimmed.to_string()),
        };
    }

    if let Some(rest) = trimmed.strip_prefix('r') {
        match rest.trim().parse::<usize>() {
            Ok(n) if n >= 1 => return BrowseAction::OpenRecent(n),
            _ => {}
        }
    }

    match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 => BrowseAction::Open(n),
        _ => BrowseAction::Unknown(trimmed.to_string()),
    }
}

/// アクションを状態に適用する
///
/// 戻り値は終了すべきかどうか。範囲外の番号は状態を変えずにメッセージを表示する。
pub fn apply_action(
    state: &mut CatalogState,
    action: BrowseAction,
    storage: &mut dyn KeyValueStorage,
) -> bool {
    match action {
        BrowseAction::Search(term) => {
            state.close_modal();
            state.handle_search(&term);
        }
        BrowseAction::NextPage => {
            state.close_modal();
            state.next_page();
        }
        BrowseAction::PrevPage => {
            state.close_modal();
            state.prev_page();
        }
        BrowseAction::GoToPage(page) => {
            state.close_modal();
            state.set_page(page);
        }
        BrowseAction::Open(n) => {
            let target = state.paged_apps().get(n - 1).cloned();
            select(state, target, storage);
        }
        BrowseAction::OpenRecent(n) => {
            let target = state.last_selected().get(n - 1).cloned();
            select(state, target, storage);
        }
        BrowseAction::CloseDetail => state.close_modal(),
        BrowseAction::Quit => return true,
        BrowseAction::Unknown(input) => {
            println!("不明なコマンド: {}", input);
            println!("{}", HELP);
        }
    }
    false
}

fn select(state: &mut CatalogState, target: Option<App>, storage: &mut dyn KeyValueStorage) {
    match target {
        Some(app) => {
            if let Err(e) = state.select_app(&app, Some(storage)) {
                log::warn!("最近表示したアプリの保存に失敗しました: {}", e);
            }
        }
        None => println!("  → 番号が範囲外です"),
    }
}

/// 対話式で閲覧
pub fn run_interactive_browse(
    state: &mut CatalogState,
    storage: &mut dyn KeyValueStorage,
) -> Result<()> {
    println!("{}", HELP);
    println!("---\n");

    loop {
        match state.selected().filter(|_| state.is_modal_open()) {
            Some(app) => println!("{}\n", render::render_detail(app, state.last_selected())),
            None => println!("{}\n", render::render_view(state)),
        }

        let input: String = Input::new()
            .with_prompt("コマンド")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CatalogError::Interactive(e.to_string()))?;

        if apply_action(state, parse_browse_action(&input), storage) {
            break;
        }
        println!();
    }

    Ok(())
}
