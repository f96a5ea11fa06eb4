//! Cached employee queries and the mutations that invalidate them.
//!
//! | operation | cache effect                                   |
//! |-----------|------------------------------------------------|
//! | list      | provides `Employees:LIST` and `Employee:<id>`  |
//! | get       | provides `Employee:<id>`                       |
//! | create    | invalidates `Employees:LIST`                   |
//! | update    | invalidates `Employee:<id>`, `Employees:LIST`  |
//! | delete    | invalidates `Employees:LIST`                   |

use contracts::domain::a001_employee::{Employee, EmployeeUpsert};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

use super::api::EmployeesApi;
use crate::shared::api_utils::ApiError;
use crate::shared::query::{use_query, CacheTag, QueryClient, QueryState};

/// `Employee:<id>`
pub fn employee_tag(id: impl Into<String>) -> CacheTag {
    CacheTag::new(Employee::element_name(), id)
}

/// `Employees:LIST`
pub fn employees_tag() -> CacheTag {
    CacheTag::list(Employee::list_name())
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum EmployeeQuery {
    List,
    ById(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeData {
    List(Vec<Employee>),
    One(Employee),
}

impl EmployeeData {
    pub fn into_list(self) -> Option<Vec<Employee>> {
        match self {
            EmployeeData::List(rows) => Some(rows),
            EmployeeData::One(_) => None,
        }
    }

    pub fn into_one(self) -> Option<Employee> {
        match self {
            EmployeeData::One(employee) => Some(employee),
            EmployeeData::List(_) => None,
        }
    }
}

/// Tags a finished query provides. A failed item query still provides its
/// own tag so that an update retries it.
pub fn provides(key: &EmployeeQuery, data: Option<&EmployeeData>) -> Vec<CacheTag> {
    match key {
        EmployeeQuery::List => {
            let mut tags = vec![employees_tag()];
            if let Some(EmployeeData::List(rows)) = data {
                tags.extend(rows.iter().map(|e| employee_tag(e.id())));
            }
            tags
        }
        EmployeeQuery::ById(id) => vec![employee_tag(id.clone())],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeMutation {
    Create,
    Update(String),
    Delete(String),
}

impl EmployeeMutation {
    pub fn invalidates(&self) -> Vec<CacheTag> {
        match self {
            EmployeeMutation::Create | EmployeeMutation::Delete(_) => vec![employees_tag()],
            EmployeeMutation::Update(id) => vec![employee_tag(id.clone()), employees_tag()],
        }
    }
}

pub type EmployeesCache = QueryClient<EmployeeQuery, EmployeeData>;

fn use_cache_and_api() -> (EmployeesCache, EmployeesApi) {
    let cache = use_context::<EmployeesCache>().expect("EmployeesCache not provided");
    let api = use_context::<EmployeesApi>().expect("EmployeesApi not provided");
    (cache, api)
}

/// All employees, kept fresh for as long as the caller is mounted
pub fn use_employees() -> Signal<QueryState<Vec<Employee>>> {
    let (cache, api) = use_cache_and_api();
    let state = use_query(
        cache,
        EmployeeQuery::List,
        move || {
            let api = api.clone();
            async move { api.list().await.map(EmployeeData::List) }
        },
        provides,
    );
    Signal::derive(move || state.get().and_then_data(EmployeeData::into_list))
}

pub fn use_employee(id: String) -> Signal<QueryState<Employee>> {
    let (cache, api) = use_cache_and_api();
    let fetch_id = id.clone();
    let state = use_query(
        cache,
        EmployeeQuery::ById(id),
        move || {
            let api = api.clone();
            let id = fetch_id.clone();
            async move { api.get(&id).await.map(EmployeeData::One) }
        },
        provides,
    );
    Signal::derive(move || state.get().and_then_data(EmployeeData::into_one))
}

fn settle<T>(cache: EmployeesCache, mutation: EmployeeMutation, result: Result<T, ApiError>) -> Result<T, ApiError> {
    match &result {
        Ok(_) => {
            cache.invalidate(&mutation.invalidates());
        }
        Err(e) => log::warn!("{:?} failed: {}", mutation, e),
    }
    result
}

pub async fn create_employee(
    api: &EmployeesApi,
    cache: EmployeesCache,
    payload: &EmployeeUpsert,
) -> Result<Employee, ApiError> {
    let result = api.create(payload).await;
    settle(cache, EmployeeMutation::Create, result)
}

pub async fn update_employee(
    api: &EmployeesApi,
    cache: EmployeesCache,
    id: &str,
    payload: &EmployeeUpsert,
) -> Result<Employee, ApiError> {
    let result = api.update(id, payload).await;
    settle(cache, EmployeeMutation::Update(id.to_string()), result)
}

pub async fn delete_employee(
    api: &EmployeesApi,
    cache: EmployeesCache,
    id: &str,
) -> Result<(), ApiError> {
    let result = api.delete(id).await;
    settle(cache, EmployeeMutation::Delete(id.to_string()), result)
}
