use client_records::domain::client::NewClient;
use client_records::domain::types::{ClientId, ClientName};
use client_records::pagination::{PageRequest, SortDirection, SortField};
use client_records::repository::errors::RepositoryError;
use client_records::repository::{ClientReader, ClientWriter, DieselRepository};

mod common;

fn seed(repo: &DieselRepository) -> Vec<ClientId> {
    [
        ("Conceição Evaristo", "10619244881", 1500.0, 2),
        ("Lázaro Ramos", "10619244882", 2500.0, 2),
        ("Clarice Lispector", "10919444522", 3800.0, 2),
        ("Carolina Maria de Jesus", "10419244771", 7500.0, 0),
        ("Gilberto Gil", "10419344882", 4000.0, 8),
    ]
    .into_iter()
    .map(|(name, cpf, income, children)| {
        let dto = common::client_dto(name, cpf, income, children);
        let new_client = NewClient::try_from(&dto).unwrap();
        repo.create_client(&new_client).unwrap().id
    })
    .collect()
}

#[test]
fn test_client_repository_crud() {
    let test_db = common::TestDb::new("test_client_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let dto = common::client_dto("Djamila Ribeiro", "106.192.448-84", 4500.0, 1);
    let created = repo
        .create_client(&NewClient::try_from(&dto).unwrap())
        .unwrap();
    assert_eq!(created.name.as_str(), "Djamila Ribeiro");
    assert_eq!(created.cpf.as_str(), "10619244884");
    assert_eq!(created.birth_date, dto.birth_date);

    let found = repo.find_client_by_id(created.id).unwrap();
    assert_eq!(found.as_ref(), Some(&created));
    assert_eq!(repo.get_client(created.id).unwrap(), created);

    let mut changed = created.clone();
    changed.name = ClientName::new("Djamila Taís Ribeiro").unwrap();
    changed.income = 5200.0;
    let saved = repo.save_client(&changed).unwrap();
    assert_eq!(saved, changed);
    assert_eq!(repo.get_client(created.id).unwrap().income, 5200.0);

    repo.delete_client(created.id).unwrap();
    assert!(repo.find_client_by_id(created.id).unwrap().is_none());
}

#[test]
fn test_missing_client_is_not_found() {
    let test_db = common::TestDb::new("test_missing_client_is_not_found.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let missing = ClientId::new(1000).unwrap();

    assert!(repo.find_client_by_id(missing).unwrap().is_none());
    assert!(matches!(
        repo.get_client(missing),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete_client(missing),
        Err(RepositoryError::NotFound)
    ));

    let dto = common::client_dto("Ninguém", "10619244884", 100.0, 0);
    let ghost = NewClient::try_from(&dto).unwrap().with_id(missing);
    assert!(matches!(
        repo.save_client(&ghost),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_list_clients_pages_sorted_by_name() {
    let test_db = common::TestDb::new("test_list_clients_pages_sorted_by_name.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed(&repo);

    let first = repo.list_clients(&PageRequest::of(0, 2)).unwrap();
    assert_eq!(first.total_elements, 5);
    assert_eq!(first.total_pages(), 3);
    assert_eq!(first.number, 0);
    let names: Vec<&str> = first.content.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Carolina Maria de Jesus", "Clarice Lispector"]);

    let last = repo.list_clients(&PageRequest::of(2, 2)).unwrap();
    assert_eq!(last.content.len(), 1);
    assert_eq!(last.content[0].name.as_str(), "Lázaro Ramos");
    assert!(last.is_last());

    let beyond = repo.list_clients(&PageRequest::of(9, 2)).unwrap();
    assert!(beyond.is_empty());
    assert_eq!(beyond.total_elements, 5);
}

#[test]
fn test_list_clients_custom_sort() {
    let test_db = common::TestDb::new("test_list_clients_custom_sort.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed(&repo);

    let request = PageRequest::of(0, 10).sorted_by(SortField::Income, SortDirection::Desc);
    let page = repo.list_clients(&request).unwrap();
    let incomes: Vec<f64> = page.content.iter().map(|c| c.income).collect();
    assert_eq!(incomes, vec![7500.0, 4000.0, 3800.0, 2500.0, 1500.0]);

    let request = PageRequest::of(0, 10).sorted_by(SortField::Children, SortDirection::Asc);
    let page = repo.list_clients(&request).unwrap();
    let children: Vec<i32> = page.content.iter().map(|c| c.children).collect();
    assert_eq!(children, vec![0, 2, 2, 2, 8]);
    // Ties keep insertion order through the id tiebreaker.
    assert!(page.content[1].id < page.content[2].id);
}

#[test]
fn test_list_clients_by_income_threshold() {
    let test_db = common::TestDb::new("test_list_clients_by_income_threshold.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed(&repo);

    let page = repo
        .list_clients_by_income(4000.0, &PageRequest::of(0, 6))
        .unwrap();
    assert_eq!(page.total_elements, 2);
    let names: Vec<&str> = page.content.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Carolina Maria de Jesus", "Gilberto Gil"]);

    let none = repo
        .list_clients_by_income(10_000.0, &PageRequest::of(0, 6))
        .unwrap();
    assert!(none.is_empty());
    assert_eq!(none.total_pages(), 0);
}
