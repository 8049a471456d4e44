//! ブラウザ TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: 一覧・絞り込み条件・選択状態
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: メッセージに応じた状態更新

use crate::brand::Brand;
use crate::catalog::{distinct_categories, filter_and_sort, CatalogQuery};
use crate::collection::BrandCollection;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

/// タブ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Catalog,
    Favorites,
    Insights,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Catalog, Tab::Favorites, Tab::Insights]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Catalog => "Catalog",
            Tab::Favorites => "Favorites",
            Tab::Insights => "Insights",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Catalog => 0,
            Tab::Favorites => 1,
            Tab::Insights => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Tab::Catalog,
            1 => Tab::Favorites,
            _ => Tab::Insights,
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + 2)
    }
}

/// テキスト入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Search,
    Material,
}

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Quit,
    NextTab,
    PrevTab,
    MoveUp,
    MoveDown,
    /// 入力欄にフォーカス移動
    Focus(InputField),
    /// 入力欄からフォーカス解除（リストへ戻る）
    Unfocus,
    Input(char),
    Backspace,
    /// フォーカス中の入力欄をクリア
    ClearInput,
    /// カテゴリを「すべて → 各カテゴリ → すべて」の順に切り替え
    CycleCategory,
    CycleSort,
    /// すべての絞り込み条件を解除
    ResetQuery,
    ToggleFavorite,
}

/// アプリケーション全体の状態
pub struct Model {
    pub collection: BrandCollection,
    pub tab: Tab,
    pub query: CatalogQuery,
    /// フォーカス中の入力欄（None ならリスト）
    pub focus: Option<InputField>,
    pub state: ListState,
    /// 直近の操作結果
    pub status: Option<String>,
    pub should_quit: bool,
}

impl Model {
    pub fn new(collection: BrandCollection) -> Self {
        let mut model = Self {
            collection,
            tab: Tab::default(),
            query: CatalogQuery::default(),
            focus: None,
            state: ListState::default(),
            status: None,
            should_quit: false,
        };
        clamp_selection(&mut model);
        model
    }

    /// 現在のタブに表示するブランド
    pub fn visible_brands(&self) -> Vec<&Brand> {
        match self.tab {
            Tab::Catalog => filter_and_sort(self.collection.brands(), &self.query),
            Tab::Favorites => self.collection.favorite_brands(),
            Tab::Insights => Vec::new(),
        }
    }

    pub fn selected_brand(&self) -> Option<&Brand> {
        let idx = self.state.selected()?;
        self.visible_brands().get(idx).copied()
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        if self.focus.is_some() {
            return match key {
                KeyCode::Esc if !self.input_text().is_empty() => Some(Msg::ClearInput),
                KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Some(Msg::Unfocus),
                KeyCode::Tab => Some(Msg::NextTab),
                KeyCode::BackTab => Some(Msg::PrevTab),
                KeyCode::Backspace => Some(Msg::Backspace),
                KeyCode::Char(c) => Some(Msg::Input(c)),
                _ => None,
            };
        }

        match key {
            KeyCode::Char('q') => Some(Msg::Quit),
            KeyCode::Tab | KeyCode::Right => Some(Msg::NextTab),
            KeyCode::BackTab | KeyCode::Left => Some(Msg::PrevTab),
            KeyCode::Up | KeyCode::Char('k') => Some(Msg::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Msg::MoveDown),
            KeyCode::Char('f') | KeyCode::Char(' ') if self.tab != Tab::Insights => {
                Some(Msg::ToggleFavorite)
            }
            // 絞り込み操作はカタログタブのみ
            KeyCode::Char('/') if self.tab == Tab::Catalog => Some(Msg::Focus(InputField::Search)),
            KeyCode::Char('m') if self.tab == Tab::Catalog => {
                Some(Msg::Focus(InputField::Material))
            }
            KeyCode::Char('c') if self.tab == Tab::Catalog => Some(Msg::CycleCategory),
            KeyCode::Char('s') if self.tab == Tab::Catalog => Some(Msg::CycleSort),
            KeyCode::Char('x') if self.tab == Tab::Catalog => Some(Msg::ResetQuery),
            _ => None,
        }
    }

    fn input_text(&self) -> &str {
        match self.focus {
            Some(InputField::Search) => &self.query.search,
            Some(InputField::Material) => &self.query.material,
            None => "",
        }
    }

    fn input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Some(InputField::Search) => Some(&mut self.query.search),
            Some(InputField::Material) => Some(&mut self.query.material),
            None => None,
        }
    }
}

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::NextTab => switch_tab(model, model.tab.next()),
        Msg::PrevTab => switch_tab(model, model.tab.prev()),
        Msg::MoveUp => move_selection(model, -1),
        Msg::MoveDown => move_selection(model, 1),
        Msg::Focus(field) => model.focus = Some(field),
        Msg::Unfocus => model.focus = None,
        Msg::Input(c) => {
            if let Some(text) = model.input_mut() {
                text.push(c);
            }
            clamp_selection(model);
        }
        Msg::Backspace => {
            if let Some(text) = model.input_mut() {
                text.pop();
            }
            clamp_selection(model);
        }
        Msg::ClearInput => {
            if let Some(text) = model.input_mut() {
                text.clear();
            }
            clamp_selection(model);
        }
        Msg::CycleCategory => {
            model.query.category = next_category(model.collection.brands(), &model.query.category);
            clamp_selection(model);
        }
        Msg::CycleSort => {
            model.query.sort = model.query.sort.next();
            clamp_selection(model);
        }
        Msg::ResetQuery => {
            model.query = CatalogQuery::default();
            clamp_selection(model);
        }
        Msg::ToggleFavorite => toggle_favorite(model),
    }
}

/// 空（すべて）→ 出現順の各カテゴリ → 空
fn next_category(brands: &[Brand], current: &str) -> String {
    let categories = distinct_categories(brands);
    let next = if current.is_empty() {
        categories.first()
    } else {
        categories
            .iter()
            .position(|c| *c == current)
            .and_then(|idx| categories.get(idx + 1))
    };
    next.map(|c| c.to_string()).unwrap_or_default()
}

fn toggle_favorite(model: &mut Model) {
    let Some((id, name)) = model
        .selected_brand()
        .map(|b| (b.id.clone(), b.name.clone()))
    else {
        return;
    };
    model.status = Some(match model.collection.toggle_favorite(&id) {
        Ok(true) => format!("Added '{}' to favorites", name),
        Ok(false) => format!("Removed '{}' from favorites", name),
        Err(e) => e.to_string(),
    });
    clamp_selection(model);
}

fn switch_tab(model: &mut Model, tab: Tab) {
    model.focus = None;
    model.tab = tab;
    model.state.select(None);
    clamp_selection(model);
}

fn move_selection(model: &mut Model, delta: isize) {
    let len = model.visible_brands().len();
    if len == 0 {
        return;
    }
    let current = model.state.selected().unwrap_or(0);
    let next = current.saturating_add_signed(delta).min(len - 1);
    model.state.select(Some(next));
}

/// 表示件数の変化後に選択位置を範囲内に収める
fn clamp_selection(model: &mut Model) {
    let len = model.visible_brands().len();
    if len == 0 {
        model.state.select(None);
        return;
    }
    let idx = model.state.selected().unwrap_or(0).min(len - 1);
    model.state.select(Some(idx));
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
