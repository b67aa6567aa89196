/**
 * In-Memory Store
 *
 * A complete store kept behind one `RwLock`: users, lists, items and the two
 * ownership relations. Each operation takes the lock once, so a create writes
 * the resource and its join row together and readers never observe one
 * without the other.
 *
 * Used by the test suites and as the fallback when no database is configured.
 */

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::ownership::{ListItem, OwnershipIndex, UserList};
use crate::backend::repository::{
    StoreError, TodoItemRepository, TodoListRepository, UserRepository,
};
use crate::shared::models::query::{SortDirection, SortField};
use crate::shared::models::todo_list::MAX_LISTS_PER_USER;
use crate::shared::models::{
    CreateTodoListDto, ItemSortField, ListSortField, NewTodoItem, NewUser, Pagination,
    SortDirective, TodoItem, TodoList, UpdateTodoItemDto, UpdateTodoListDto, User,
};

#[derive(Debug, Default)]
struct State {
    users: HashMap<Uuid, User>,
    lists: HashMap<Uuid, TodoList>,
    items: HashMap<Uuid, TodoItem>,
    /// Keyed by list id: a list has exactly one owner
    user_lists: HashMap<Uuid, UserList>,
    /// Keyed by item id: an item sits in exactly one list
    list_items: HashMap<Uuid, ListItem>,
}

impl State {
    fn owns_list(&self, user_id: Uuid, list_id: Uuid) -> bool {
        self.user_lists
            .get(&list_id)
            .is_some_and(|row| row.user_id == user_id)
    }

    fn list_count(&self, user_id: Uuid) -> i64 {
        self.user_lists
            .values()
            .filter(|row| row.user_id == user_id)
            .count() as i64
    }

    fn owns_item(&self, user_id: Uuid, item_id: Uuid) -> bool {
        self.list_items
            .get(&item_id)
            .is_some_and(|row| self.owns_list(user_id, row.list_id))
    }
}

/// In-memory implementation of every repository trait
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare_lists(a: &TodoList, b: &TodoList, field: ListSortField) -> Ordering {
    match field {
        ListSortField::Title => a.title.cmp(&b.title),
        ListSortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

fn compare_items(a: &TodoItem, b: &TodoItem, field: ItemSortField) -> Ordering {
    match field {
        ItemSortField::Title => a.title.cmp(&b.title),
        ItemSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        ItemSortField::Deadline => a.deadline.cmp(&b.deadline),
    }
}

/// Sort by the directive, or by creation time when there is none
fn sort_by_directive<T, F, C>(rows: &mut [T], sort: Option<SortDirective<F>>, default: F, compare: C)
where
    F: SortField,
    C: Fn(&T, &T, F) -> Ordering,
{
    let (field, direction) = sort
        .map(|directive| (directive.field, directive.direction))
        .unwrap_or((default, SortDirection::Ascending));

    rows.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: NewUser) -> Result<Uuid, StoreError> {
        let mut state = self.state.write().await;

        if state.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation { field: "email" });
        }
        if state.users.values().any(|u| u.username == user.username) {
            return Err(StoreError::UniqueViolation { field: "username" });
        }

        let id = Uuid::new_v4();
        state.users.insert(
            id,
            User {
                id,
                email: user.email,
                username: user.username,
                password_hash: user.password_hash,
            },
        );
        Ok(id)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }
}

#[async_trait]
impl TodoListRepository for MemoryStore {
    async fn create(&self, user_id: Uuid, list: CreateTodoListDto) -> Result<Uuid, StoreError> {
        let mut state = self.state.write().await;
        if state.list_count(user_id) >= MAX_LISTS_PER_USER {
            return Err(StoreError::ListLimitExceeded);
        }

        let list_id = Uuid::new_v4();
        state.lists.insert(
            list_id,
            TodoList {
                id: list_id,
                title: list.title,
                description: list.description,
                created_at: Utc::now(),
            },
        );
        state.user_lists.insert(
            list_id,
            UserList {
                id: Uuid::new_v4(),
                user_id,
                list_id,
            },
        );
        Ok(list_id)
    }

    async fn count(&self, user_id: Uuid) -> Result<i64, StoreError> {
        Ok(self.state.read().await.list_count(user_id))
    }

    async fn get_all(
        &self,
        user_id: Uuid,
        sort: Option<SortDirective<ListSortField>>,
    ) -> Result<Vec<TodoList>, StoreError> {
        let state = self.state.read().await;
        let mut lists: Vec<TodoList> = state
            .user_lists
            .values()
            .filter(|row| row.user_id == user_id)
            .filter_map(|row| state.lists.get(&row.list_id).cloned())
            .collect();

        sort_by_directive(&mut lists, sort, ListSortField::CreatedAt, compare_lists);
        Ok(lists)
    }

    async fn get_by_id(
        &self,
        user_id: Uuid,
        list_id: Uuid,
    ) -> Result<Option<TodoList>, StoreError> {
        let state = self.state.read().await;
        if !state.owns_list(user_id, list_id) {
            return Ok(None);
        }
        Ok(state.lists.get(&list_id).cloned())
    }

    async fn update(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        patch: UpdateTodoListDto,
    ) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        if !state.owns_list(user_id, list_id) {
            return Ok(false);
        }
        let Some(list) = state.lists.get_mut(&list_id) else {
            return Ok(false);
        };

        if let Some(title) = patch.title {
            list.title = title;
        }
        if let Some(description) = patch.description {
            list.description = description;
        }
        Ok(true)
    }

    async fn delete(&self, user_id: Uuid, list_id: Uuid) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        if !state.owns_list(user_id, list_id) {
            return Ok(false);
        }

        let item_ids: Vec<Uuid> = state
            .list_items
            .values()
            .filter(|row| row.list_id == list_id)
            .map(|row| row.item_id)
            .collect();
        for item_id in item_ids {
            state.items.remove(&item_id);
            state.list_items.remove(&item_id);
        }

        state.user_lists.remove(&list_id);
        Ok(state.lists.remove(&list_id).is_some())
    }
}

#[async_trait]
impl TodoItemRepository for MemoryStore {
    async fn create(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        item: NewTodoItem,
    ) -> Result<Option<Uuid>, StoreError> {
        let mut state = self.state.write().await;
        if !state.owns_list(user_id, list_id) {
            return Ok(None);
        }

        let item_id = Uuid::new_v4();
        state.items.insert(
            item_id,
            TodoItem {
                id: item_id,
                title: item.title,
                description: item.description,
                created_at: item.created_at,
                deadline: item.deadline,
                completed: false,
            },
        );
        state.list_items.insert(
            item_id,
            ListItem {
                id: Uuid::new_v4(),
                list_id,
                item_id,
            },
        );
        Ok(Some(item_id))
    }

    async fn get_all(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        pagination: Pagination,
        sort: Option<SortDirective<ItemSortField>>,
    ) -> Result<Vec<TodoItem>, StoreError> {
        let state = self.state.read().await;
        if !state.owns_list(user_id, list_id) {
            return Ok(Vec::new());
        }

        let mut items: Vec<TodoItem> = state
            .list_items
            .values()
            .filter(|row| row.list_id == list_id)
            .filter_map(|row| state.items.get(&row.item_id).cloned())
            .collect();

        sort_by_directive(&mut items, sort, ItemSortField::CreatedAt, compare_items);

        let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        Ok(items
            .into_iter()
            .skip(offset)
            .take(pagination.limit as usize)
            .collect())
    }

    async fn get_by_id(
        &self,
        user_id: Uuid,
        item_id: Uuid,
    ) -> Result<Option<TodoItem>, StoreError> {
        let state = self.state.read().await;
        if !state.owns_item(user_id, item_id) {
            return Ok(None);
        }
        Ok(state.items.get(&item_id).cloned())
    }

    async fn update(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        patch: UpdateTodoItemDto,
    ) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        if !state.owns_item(user_id, item_id) {
            return Ok(false);
        }
        let Some(item) = state.items.get_mut(&item_id) else {
            return Ok(false);
        };

        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(deadline) = patch.deadline {
            item.deadline = deadline;
        }
        if let Some(completed) = patch.completed {
            item.completed = completed;
        }
        Ok(true)
    }

    async fn delete(&self, user_id: Uuid, item_id: Uuid) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        if !state.owns_item(user_id, item_id) {
            return Ok(false);
        }
        state.list_items.remove(&item_id);
        Ok(state.items.remove(&item_id).is_some())
    }
}

#[async_trait]
impl OwnershipIndex for MemoryStore {
    async fn owns_list(&self, user_id: Uuid, list_id: Uuid) -> Result<bool, StoreError> {
        Ok(self.state.read().await.owns_list(user_id, list_id))
    }

    async fn owns_item(&self, user_id: Uuid, item_id: Uuid) -> Result<bool, StoreError> {
        Ok(self.state.read().await.owns_item(user_id, item_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::repository::Repositories;
    use assert_matches::assert_matches;
    use chrono::Duration;

    fn new_user(email: &str, username: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            username: username.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    fn list(title: &str) -> CreateTodoListDto {
        CreateTodoListDto {
            title: title.to_string(),
            description: "description".to_string(),
        }
    }

    fn item(title: &str) -> NewTodoItem {
        let now = Utc::now();
        NewTodoItem {
            title: title.to_string(),
            description: "description".to_string(),
            created_at: now,
            deadline: now + Duration::days(1),
        }
    }

    #[tokio::test]
    async fn test_concurrent_list_creates_respect_cap() {
        let repos = Repositories::in_memory();
        let owner = Uuid::new_v4();

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let lists = repos.lists.clone();
                tokio::spawn(async move { lists.create(owner, list(&format!("list {}", i))).await })
            })
            .collect();

        let mut rejected = 0;
        for handle in handles {
            if let Err(err) = handle.await.unwrap() {
                assert_matches!(err, StoreError::ListLimitExceeded);
                rejected += 1;
            }
        }

        assert_eq!(rejected, 5);
        assert_eq!(repos.lists.count(owner).await.unwrap(), MAX_LISTS_PER_USER);
    }

    #[tokio::test]
    async fn test_unique_email_and_username() {
        let repos = Repositories::in_memory();
        repos.users.create(new_user("a@x.com", "alice")).await.unwrap();

        let err = repos.users.create(new_user("a@x.com", "other")).await.unwrap_err();
        assert_matches!(err, StoreError::UniqueViolation { field: "email" });

        let err = repos.users.create(new_user("b@x.com", "alice")).await.unwrap_err();
        assert_matches!(err, StoreError::UniqueViolation { field: "username" });
    }

    #[tokio::test]
    async fn test_lists_are_scoped_to_their_owner() {
        let repos = Repositories::in_memory();
        let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());

        let list_id = repos.lists.create(alice, list("groceries")).await.unwrap();

        assert!(repos.lists.get_by_id(alice, list_id).await.unwrap().is_some());
        assert!(repos.lists.get_by_id(bob, list_id).await.unwrap().is_none());
        assert!(repos.lists.get_all(bob, None).await.unwrap().is_empty());
        assert_eq!(repos.lists.count(alice).await.unwrap(), 1);
        assert_eq!(repos.lists.count(bob).await.unwrap(), 0);

        assert!(repos.ownership.owns_list(alice, list_id).await.unwrap());
        assert!(!repos.ownership.owns_list(bob, list_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_foreign_update_and_delete_do_nothing() {
        let repos = Repositories::in_memory();
        let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
        let list_id = repos.lists.create(alice, list("groceries")).await.unwrap();

        let patch = UpdateTodoListDto {
            title: Some("stolen".to_string()),
            description: None,
        };
        assert!(!repos.lists.update(bob, list_id, patch).await.unwrap());
        assert!(!repos.lists.delete(bob, list_id).await.unwrap());

        let survivor = repos.lists.get_by_id(alice, list_id).await.unwrap().unwrap();
        assert_eq!(survivor.title, "groceries");
    }

    #[tokio::test]
    async fn test_list_sorting() {
        let repos = Repositories::in_memory();
        let user = Uuid::new_v4();
        for title in ["banana", "apple", "cherry"] {
            repos.lists.create(user, list(title)).await.unwrap();
        }

        let titles = |lists: Vec<TodoList>| lists.into_iter().map(|l| l.title).collect::<Vec<_>>();

        let sorted = repos
            .lists
            .get_all(user, SortDirective::parse("title"))
            .await
            .unwrap();
        assert_eq!(titles(sorted), ["apple", "banana", "cherry"]);

        let sorted = repos
            .lists
            .get_all(user, SortDirective::parse("-TITLE"))
            .await
            .unwrap();
        assert_eq!(titles(sorted), ["cherry", "banana", "apple"]);
    }

    #[tokio::test]
    async fn test_item_create_requires_list_ownership() {
        let repos = Repositories::in_memory();
        let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
        let list_id = repos.lists.create(alice, list("groceries")).await.unwrap();

        assert!(repos.items.create(bob, list_id, item("milk")).await.unwrap().is_none());

        let item_id = repos
            .items
            .create(alice, list_id, item("milk"))
            .await
            .unwrap()
            .unwrap();
        assert!(repos.ownership.owns_item(alice, item_id).await.unwrap());
        assert!(!repos.ownership.owns_item(bob, item_id).await.unwrap());
        assert!(repos.items.get_by_id(bob, item_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_item_pagination() {
        let repos = Repositories::in_memory();
        let user = Uuid::new_v4();
        let list_id = repos.lists.create(user, list("groceries")).await.unwrap();
        for title in ["aaa", "bbb", "ccc", "ddd", "eee", "fff", "ggg"] {
            repos.items.create(user, list_id, item(title)).await.unwrap();
        }

        let sort = SortDirective::parse("title");
        let first = repos
            .items
            .get_all(user, list_id, Pagination { page: 1, limit: 5 }, sort)
            .await
            .unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(first[0].title, "aaa");

        let second = repos
            .items
            .get_all(user, list_id, Pagination { page: 2, limit: 5 }, sort)
            .await
            .unwrap();
        let titles: Vec<_> = second.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["fff", "ggg"]);
    }

    #[tokio::test]
    async fn test_item_patch_merges_fields() {
        let repos = Repositories::in_memory();
        let user = Uuid::new_v4();
        let list_id = repos.lists.create(user, list("groceries")).await.unwrap();
        let item_id = repos.items.create(user, list_id, item("milk")).await.unwrap().unwrap();

        let patch = UpdateTodoItemDto {
            completed: Some(true),
            ..Default::default()
        };
        assert!(repos.items.update(user, item_id, patch).await.unwrap());

        let stored = repos.items.get_by_id(user, item_id).await.unwrap().unwrap();
        assert!(stored.completed);
        assert_eq!(stored.title, "milk");
    }

    #[tokio::test]
    async fn test_list_delete_cascades_to_items() {
        let repos = Repositories::in_memory();
        let user = Uuid::new_v4();
        let list_id = repos.lists.create(user, list("groceries")).await.unwrap();
        let item_id = repos.items.create(user, list_id, item("milk")).await.unwrap().unwrap();

        assert!(repos.lists.delete(user, list_id).await.unwrap());
        assert!(!repos.lists.delete(user, list_id).await.unwrap());
        assert!(repos.items.get_by_id(user, item_id).await.unwrap().is_none());
        assert!(!repos.ownership.owns_item(user, item_id).await.unwrap());
    }
}
