//! Page repository.

use chrono::Utc;
use domain::models::{Page, PageDraft, PageType};
use domain::services::StaticRoute;
use tracing::{info, warn};
use uuid::Uuid;

use super::RepositoryError;
use crate::keys::PAGES_KEY;
use crate::store::{Store, StoreError};

/// Repository for pages, blog posts and service pages.
#[derive(Clone, Debug)]
pub struct PageRepository {
    store: Store,
}

impl PageRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All pages in insertion order.
    pub fn list_pages(&self) -> Result<Vec<Page>, StoreError> {
        self.store.read(PAGES_KEY)
    }

    /// Published pages of one type, in insertion order.
    pub fn list_published(&self, page_type: PageType) -> Result<Vec<Page>, StoreError> {
        Ok(self
            .list_pages()?
            .into_iter()
            .filter(|p| p.is_published && p.page_type == page_type)
            .collect())
    }

    /// Exact, case-sensitive slug match.
    pub fn get_page_by_slug(&self, slug: &str) -> Result<Option<Page>, StoreError> {
        Ok(self.list_pages()?.into_iter().find(|p| p.slug == slug))
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Page>, StoreError> {
        Ok(self.list_pages()?.into_iter().find(|p| p.id == id))
    }

    /// Creates or replaces a page.
    ///
    /// A draft whose id matches a stored page replaces it in place. Any other
    /// draft is appended with a freshly generated id. `last_modified` is always
    /// set to now. Fails with `SlugConflict` when another page owns the slug.
    pub fn save_page(&self, draft: PageDraft) -> Result<Page, RepositoryError> {
        let _guard = self.store.lock_writes()?;
        let pages: Vec<Page> = self.store.read(PAGES_KEY)?;
        self.store_draft(pages, draft)
    }

    /// Replaces the page with `id`, or returns `None` when no such page exists.
    ///
    /// The existence check and the write happen under one write lock, so a
    /// concurrent delete can never turn the update into a create.
    pub fn update_existing(
        &self,
        id: &str,
        mut draft: PageDraft,
    ) -> Result<Option<Page>, RepositoryError> {
        let _guard = self.store.lock_writes()?;
        let pages: Vec<Page> = self.store.read(PAGES_KEY)?;

        if !pages.iter().any(|p| p.id == id) {
            return Ok(None);
        }

        draft.id = id.to_string();
        self.store_draft(pages, draft).map(Some)
    }

    /// Applies `draft` to `pages` and persists the result. Caller holds the write lock.
    fn store_draft(&self, mut pages: Vec<Page>, draft: PageDraft) -> Result<Page, RepositoryError> {
        if let Some(existing) = pages
            .iter()
            .find(|p| p.slug == draft.slug && (draft.is_new() || p.id != draft.id))
        {
            return Err(RepositoryError::SlugConflict {
                slug: draft.slug,
                existing_id: existing.id.clone(),
            });
        }

        if StaticRoute::from_path(&draft.slug).is_some() {
            warn!(
                slug = %draft.slug,
                "Page slug is shadowed by a static route and is unreachable by navigation"
            );
        }

        let now = Utc::now();
        let position = if draft.is_new() {
            None
        } else {
            pages.iter().position(|p| p.id == draft.id)
        };

        let saved = match position {
            Some(index) => {
                let id = draft.id.clone();
                let page = Page::from_draft(draft, id, now);
                pages[index] = page.clone();
                page
            }
            None => {
                let page = Page::from_draft(draft, Uuid::new_v4().to_string(), now);
                pages.push(page.clone());
                page
            }
        };

        self.store.write(PAGES_KEY, &pages)?;

        info!(
            page_id = %saved.id,
            slug = %saved.slug,
            created = position.is_none(),
            "Page saved"
        );
        Ok(saved)
    }

    /// Removes the page with `id`. Returns whether a page was removed.
    pub fn delete_page(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.store.lock_writes()?;
        let mut pages: Vec<Page> = self.store.read(PAGES_KEY)?;

        let before = pages.len();
        pages.retain(|p| p.id != id);
        if pages.len() == before {
            return Ok(false);
        }

        self.store.write(PAGES_KEY, &pages)?;
        info!(page_id = %id, "Page deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use domain::models::SeoMetadata;

    fn repo() -> PageRepository {
        PageRepository::new(Store::in_memory())
    }

    fn draft(slug: &str) -> PageDraft {
        PageDraft {
            id: String::new(),
            slug: slug.to_string(),
            title: "Summer Promo".to_string(),
            content: "<p>Offer</p>".to_string(),
            is_published: true,
            page_type: PageType::Page,
            seo: SeoMetadata::basic("Summer Promo", "Limited offer"),
            author: None,
            category: None,
            tags: vec!["promo".to_string()],
            featured_image: None,
        }
    }

    #[test]
    fn test_create_assigns_id_and_timestamp() {
        let repo = repo();
        let before = Utc::now();

        let page = repo.save_page(draft("/promo")).unwrap();

        assert!(!page.id.is_empty());
        assert!(page.last_modified >= before);
        assert_eq!(repo.list_pages().unwrap(), vec![page.clone()]);
        assert_eq!(repo.get_page_by_slug("/promo").unwrap(), Some(page));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let repo = repo();
        let first = repo.save_page(draft("/first")).unwrap();
        repo.save_page(draft("/second")).unwrap();

        let mut edit = first.to_draft();
        edit.title = "Renamed".to_string();
        let updated = repo.save_page(edit).unwrap();

        let pages = repo.list_pages().unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].id, first.id);
        assert_eq!(pages[0].title, "Renamed");
        assert!(updated.last_modified >= first.last_modified);
    }

    #[test]
    fn test_unknown_id_creates_with_fresh_id() {
        let repo = repo();
        let mut orphan = draft("/orphan");
        orphan.id = "does-not-exist".to_string();

        let page = repo.save_page(orphan).unwrap();
        assert_ne!(page.id, "does-not-exist");
        assert_eq!(repo.list_pages().unwrap().len(), 1);
    }

    #[test]
    fn test_update_existing_replaces_known_page() {
        let repo = repo();
        let created = repo.save_page(draft("/promo")).unwrap();

        let mut edit = draft("/promo");
        edit.title = "Edited".to_string();
        let updated = repo.update_existing(&created.id, edit).unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Edited");
        assert_eq!(repo.list_pages().unwrap().len(), 1);
    }

    #[test]
    fn test_update_existing_after_delete_is_none() {
        let repo = repo();
        let created = repo.save_page(draft("/promo")).unwrap();
        assert!(repo.delete_page(&created.id).unwrap());

        let result = repo.update_existing(&created.id, draft("/promo")).unwrap();

        assert!(result.is_none());
        assert!(repo.list_pages().unwrap().is_empty());
    }

    #[test]
    fn test_slug_conflict_rejected() {
        let repo = repo();
        let existing = repo.save_page(draft("/promo")).unwrap();

        let err = repo.save_page(draft("/promo")).unwrap_err();
        match err {
            RepositoryError::SlugConflict { slug, existing_id } => {
                assert_eq!(slug, "/promo");
                assert_eq!(existing_id, existing.id);
            }
            other => panic!("expected slug conflict, got {:?}", other),
        }
        assert_eq!(repo.list_pages().unwrap().len(), 1);
    }

    #[test]
    fn test_saving_page_under_own_slug_is_not_a_conflict() {
        let repo = repo();
        let page = repo.save_page(draft("/promo")).unwrap();
        assert!(repo.save_page(page.to_draft()).is_ok());
    }

    #[test]
    fn test_slug_lookup_is_exact() {
        let repo = repo();
        repo.save_page(draft("/Promo")).unwrap();

        assert!(repo.get_page_by_slug("/promo").unwrap().is_none());
        assert!(repo.get_page_by_slug("/Promo/").unwrap().is_none());
        assert!(repo.get_page_by_slug("/Promo").unwrap().is_some());
    }

    #[test]
    fn test_list_published_filters_type_and_flag() {
        let repo = repo();
        let mut blog = draft("/blog/a");
        blog.page_type = PageType::Blog;
        repo.save_page(blog).unwrap();

        let mut hidden = draft("/blog/b");
        hidden.page_type = PageType::Blog;
        hidden.is_published = false;
        repo.save_page(hidden).unwrap();

        repo.save_page(draft("/about-us")).unwrap();

        let blogs = repo.list_published(PageType::Blog).unwrap();
        assert_eq!(blogs.len(), 1);
        assert_eq!(blogs[0].slug, "/blog/a");
    }

    #[test]
    fn test_delete_page() {
        let repo = repo();
        let page = repo.save_page(draft("/promo")).unwrap();

        assert!(repo.delete_page(&page.id).unwrap());
        assert!(!repo.delete_page(&page.id).unwrap());
        assert!(repo.find_by_id(&page.id).unwrap().is_none());
    }

    #[test]
    fn test_quota_failure_leaves_pages_unchanged() {
        let repo = PageRepository::new(Store::new(MemoryStore::new(1024)));
        repo.save_page(draft("/small")).unwrap();

        let mut huge = draft("/huge");
        huge.content = "x".repeat(4096);
        let err = repo.save_page(huge).unwrap_err();

        assert!(matches!(
            err,
            RepositoryError::Store(StoreError::QuotaExceeded { .. })
        ));
        assert_eq!(repo.list_pages().unwrap().len(), 1);
    }

    #[test]
    fn test_seeded_store_lookup() {
        let store = Store::in_memory();
        store.initialize_if_empty().unwrap();
        let repo = PageRepository::new(store);

        let contact = repo.get_page_by_slug("/contact").unwrap().unwrap();
        assert_eq!(contact.title, "Contact Us");
        assert_eq!(repo.list_published(PageType::Blog).unwrap().len(), 2);
    }
}
