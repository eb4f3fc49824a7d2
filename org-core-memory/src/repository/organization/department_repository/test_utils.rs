use heapless::String as HeaplessString;
use org_core_db::models::organization::department::DepartmentModel;
use uuid::Uuid;

pub fn create_test_department(name: &str, parent_id: Option<Uuid>) -> DepartmentModel {
    DepartmentModel::new(HeaplessString::try_from(name).unwrap(), parent_id)
}
