//! 端末表示用の文字列生成
//!
//! 画面（検索結果グリッド・ページ送り・詳細表示）をテキストに変換する。
//! 出力は呼び出し側で `println!` する。

use app_catalog_common::{App, CatalogState, PageControls};

/// 現在ページのカード一覧（番号はページ内で1始まり）
pub fn render_grid(apps: &[App]) -> String {
    apps.iter()
        .enumerate()
        .map(|(i, app)| format!("  [{:>2}] {} ({})", i + 1, app.name, app.app_id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// ページ送り: `< 1 [2] 3 >`（端のページでは矢印を `-` にする）
pub fn render_pagination(controls: &PageControls) -> String {
    let mut parts = Vec::with_capacity(controls.pages.len() + 2);
    parts.push(if controls.prev_disabled { "-".to_string() } else { "<".to_string() });
    for &page in &controls.pages {
        if page == controls.current {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    parts.push(if controls.next_disabled { "-".to_string() } else { ">".to_string() });
    parts.join(" ")
}

pub fn render_empty_search(search: &str) -> String {
    format!("「{}」に一致するアプリが見つかりません。", search)
}

pub fn render_empty_catalog() -> String {
    "アプリがありません（カタログを取得できませんでした）".to_string()
}

/// 一覧画面
pub fn render_view(state: &CatalogState) -> String {
    if state.apps().is_empty() {
        return render_empty_catalog();
    }

    let paged = state.paged_apps();
    if paged.is_empty() {
        return render_empty_search(state.search());
    }

    let mut out = String::new();
    if !state.search().is_empty() {
        out.push_str(&format!("検索: \"{}\"\n", state.search()));
    }
    out.push_str(&render_grid(&paged));
    out.push('\n');
    out.push_str(&render_pagination(&state.page_controls()));
    out.push_str(&format!(
        "  (全{}件, {}/{}ページ)",
        state.filtered_apps().len(),
        state.page(),
        state.max_page()
    ));
    out
}

/// 最近表示したアプリ（新しい順、`r1` から番号付け）
pub fn render_recent(recent: &[App]) -> String {
    if recent.is_empty() {
        return "  (まだありません)".to_string();
    }
    recent
        .iter()
        .enumerate()
        .map(|(i, app)| format!("  [r{}] {} ({})", i + 1, app.name, app.app_id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 詳細表示（モーダル相当）
pub fn render_detail(app: &App, recent: &[App]) -> String {
    let mut lines = vec![
        format!("==== {} ====", app.name),
        format!("  ID:       {}", app.app_id),
        format!("  リンク:   {}", app.link),
    ];
    if !app.color.is_empty() {
        lines.push(format!("  色:       {}", app.color));
    }
    if !app.icon.is_empty() {
        lines.push(format!("  アイコン: {}", app.icon));
    }
    lines.push("--- 最近表示したアプリ ---".to_string());
    lines.push(render_recent(recent));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: &str, name: &str) -> App {
        App {
            app_id: id.to_string(),
            name: name.to_string(),
            link: format!("https://{}.example", id),
            ..Default::default()
        }
    }

    fn controls(current: usize, max_page: usize) -> PageControls {
        PageControls {
            current,
            max_page,
            prev_disabled: current == 1,
            next_disabled: current == max_page,
            pages: (1..=max_page).collect(),
        }
    }

    #[test]
    fn test_render_grid_numbers_per_page() {
        let out = render_grid(&[app("slack", "Slack"), app("trello", "Trello")]);
        assert_eq!(out, "  [ 1] Slack (slack)\n  [ 2] Trello (trello)");
    }

    #[test]
    fn test_render_pagination() {
        assert_eq!(render_pagination(&controls(1, 1)), "- [1] -");
        assert_eq!(render_pagination(&controls(2, 3)), "< 1 [2] 3 >");
        assert_eq!(render_pagination(&controls(3, 3)), "< 1 2 [3] -");
    }

    #[test]
    fn test_render_view_states() {
        let mut state = CatalogState::new();
        state.load_apps(Vec::new(), None);
        assert_eq!(render_view(&state), render_empty_catalog());

        state.load_apps(vec![app("slack", "Slack"), app("gmail", "Gmail")], None);
        let out = render_view(&state);
        assert!(out.contains("[ 1] Slack (slack)"));
        assert!(out.contains("- [1] -"));
        assert!(out.contains("全2件"));

        state.handle_search("notion");
        assert_eq!(render_view(&state), "「notion」に一致するアプリが見つかりません。");
    }

    #[test]
    fn test_render_detail_with_recent() {
        let slack = app("slack", "Slack");
        let out = render_detail(&slack, &[slack.clone(), app("gmail", "Gmail")]);
        assert!(out.starts_with("==== Slack ===="));
        assert!(out.contains("https://slack.example"));
        assert!(out.contains("[r1] Slack (slack)"));
        assert!(out.contains("[r2] Gmail (gmail)"));
        assert!(!out.contains("色:"));
    }

    #[test]
    fn test_render_recent_empty() {
        assert!(render_recent(&[]).contains("まだありません"));
    }
}
