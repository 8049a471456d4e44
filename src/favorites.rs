//! お気に入り（セッション内のみ、永続化しない）

use crate::brand::Brand;

/// お気に入りに登録したブランドIDの集合（登録順を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// 登録・解除を切り替え、切り替え後に登録済みなら true
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.ids.retain(|f| f != id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// お気に入りのブランドを一覧の並び順で返す
    pub fn select<'a>(&self, brands: &'a [Brand]) -> Vec<&'a Brand> {
        brands.iter().filter(|b| self.contains(&b.id)).collect()
    }
}
