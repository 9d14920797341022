//! In-memory repository fake shared by the gateway tests
//!
//! Records every storage call in order so tests can assert on sequencing,
//! and can be told to fail individual operations.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use futures_util::{stream, Stream};

use crate::{
    Department, DepartmentId, DepartmentRepository, Employee, EmployeeId, EmployeeRepository,
    RepositoryError,
};

#[derive(Default)]
pub(crate) struct FakeState {
    pub departments: BTreeMap<DepartmentId, String>,
    pub employees: BTreeMap<EmployeeId, (String, Option<DepartmentId>)>,
    pub next_id: i64,
    pub calls: Vec<&'static str>,
    pub fail_unassign: bool,
    pub fail_find_all: bool,
}

#[derive(Clone, Default)]
pub(crate) struct FakeStore {
    pub state: Arc<Mutex<FakeState>>,
}

impl FakeStore {
    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn with_state<T>(&self, f: impl FnOnce(&mut FakeState) -> T) -> T {
        f(&mut self.state.lock().unwrap())
    }

    fn record(&self, call: &'static str) -> std::sync::MutexGuard<'_, FakeState> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        state
    }
}

impl FakeState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl DepartmentRepository for FakeStore {
    fn find_all(&self) -> impl Stream<Item = Result<Department, RepositoryError>> + Send {
        let state = self.record("departments.find_all");
        let items: Vec<_> = if state.fail_find_all {
            vec![Err(RepositoryError::unavailable("fake outage"))]
        } else {
            state
                .departments
                .iter()
                .map(|(id, name)| Ok(Department::from_parts(*id, name.clone())))
                .collect()
        };
        stream::iter(items)
    }

    fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, RepositoryError>> + Send {
        let state = self.record("departments.find_by_id");
        let found = state
            .departments
            .get(&id)
            .map(|name| Department::from_parts(id, name.clone()));
        async move { Ok(found) }
    }

    fn save(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<DepartmentId>, RepositoryError>> + Send {
        let mut state = self.record("departments.save");
        let id = DepartmentId::new(state.next_id());
        state.departments.insert(id, name.to_string());
        async move { Ok(Some(id)) }
    }

    fn update(
        &self,
        id: DepartmentId,
        name: &str,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        let mut state = self.record("departments.update");
        let updated = match state.departments.get_mut(&id) {
            Some(existing) => {
                *existing = name.to_string();
                true
            }
            None => false,
        };
        async move { Ok(updated) }
    }

    fn delete(
        &self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        let mut state = self.record("departments.delete");
        let deleted = state.departments.remove(&id).is_some();
        async move { Ok(deleted) }
    }
}

impl EmployeeRepository for FakeStore {
    fn find_all(&self) -> impl Stream<Item = Result<Employee, RepositoryError>> + Send {
        let state = self.record("employees.find_all");
        let items: Vec<_> = state
            .employees
            .iter()
            .map(|(id, (name, dept))| Ok(Employee::from_parts(*id, name.clone(), *dept)))
            .collect();
        stream::iter(items)
    }

    fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, RepositoryError>> + Send {
        let state = self.record("employees.find_by_id");
        let found = state
            .employees
            .get(&id)
            .map(|(name, dept)| Employee::from_parts(id, name.clone(), *dept));
        async move { Ok(found) }
    }

    fn find_by_department(
        &self,
        department_id: DepartmentId,
    ) -> impl Stream<Item = Result<Employee, RepositoryError>> + Send {
        let state = self.record("employees.find_by_department");
        let items: Vec<_> = state
            .employees
            .iter()
            .filter(|(_, (_, dept))| *dept == Some(department_id))
            .map(|(id, (name, dept))| Ok(Employee::from_parts(*id, name.clone(), *dept)))
            .collect();
        stream::iter(items)
    }

    fn save(
        &self,
        name: &str,
        department_id: Option<DepartmentId>,
    ) -> impl Future<Output = Result<Option<EmployeeId>, RepositoryError>> + Send {
        let mut state = self.record("employees.save");
        let id = EmployeeId::new(state.next_id());
        let row = (name.to_string(), department_id);
        state.employees.insert(id, row);
        async move { Ok(Some(id)) }
    }

    fn update(
        &self,
        id: EmployeeId,
        name: &str,
        department_id: Option<DepartmentId>,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        let mut state = self.record("employees.update");
        let updated = match state.employees.get_mut(&id) {
            Some(existing) => {
                *existing = (name.to_string(), department_id);
                true
            }
            None => false,
        };
        async move { Ok(updated) }
    }

    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        let mut state = self.record("employees.delete");
        let deleted = state.employees.remove(&id).is_some();
        async move { Ok(deleted) }
    }

    fn unassign_employees(
        &self,
        department_id: DepartmentId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        let mut state = self.record("employees.unassign_employees");
        let result = if state.fail_unassign {
            Err(RepositoryError::query_failed("unassign rejected"))
        } else {
            let mut changed = false;
            for (_, dept) in state.employees.values_mut() {
                if *dept == Some(department_id) {
                    *dept = None;
                    changed = true;
                }
            }
            Ok(changed)
        };
        async move { result }
    }
}
