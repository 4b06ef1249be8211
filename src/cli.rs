use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "app-catalog")]
#[command(about = "連携アプリカタログの検索・閲覧ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログ取得元（URLまたはJSONファイル）
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// 最近表示したアプリの保存先ファイル
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// アプリ一覧を表示（検索・ページ指定）
    List {
        /// 名前で絞り込み（大文字小文字を区別しない）
        #[arg(short, long, default_value = "")]
        search: String,

        /// ページ番号（1始まり、範囲外は丸める）
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// アプリの詳細を表示（最近表示したアプリに記録）
    Show {
        /// アプリID
        #[arg(required = true)]
        app_id: String,
    },

    /// 最近表示したアプリを表示
    Recent,

    /// 対話的に閲覧
    Browse,

    /// 設定を表示/編集
    Config {
        /// カタログ取得元URLを設定
        #[arg(long)]
        set_source: Option<String>,

        /// 1ページあたりの件数を設定
        #[arg(long)]
        set_page_size: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// 保存データ管理
    Storage {
        /// 保存データを削除
        #[arg(long)]
        clear: bool,

        /// 保存データ情報を表示
        #[arg(long)]
        info: bool,
    },
}
