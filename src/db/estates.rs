use crate::db::connection::Database;
use crate::domain::{Estate, EstateType, Picture};
use crate::errors::StoreError;
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};

const SELECT_ESTATE: &str = r#"
    SELECT
        id, district, type, description, price, surface,
        number_of_rooms, number_of_bathrooms, number_of_bedrooms,
        address, pictures
    FROM estates
"#;

/// Data access for the `estates` table.
pub struct EstateDao<'a> {
    db: &'a Database,
}

impl<'a> EstateDao<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Appends `estates` in a single transaction and returns the ids assigned to
    /// them, in input order. The `id` field of the inputs is ignored.
    pub fn insert(&self, estates: &[Estate]) -> Result<Vec<i64>, StoreError> {
        self.db.with_conn(|conn| {
            let tx = conn.transaction()?;
            let mut ids = Vec::with_capacity(estates.len());
            {
                let mut stmt = tx.prepare(
                    r#"
                    INSERT INTO estates (
                        district, type, description, price, surface,
                        number_of_rooms, number_of_bathrooms, number_of_bedrooms,
                        address, pictures
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                    "#,
                )?;

                for estate in estates {
                    let pictures = serde_json::to_string(&estate.pictures)?;
                    stmt.execute(params![
                        &estate.district,
                        estate.estate_type.as_str(),
                        &estate.description,
                        estate.price,
                        estate.surface,
                        estate.number_of_rooms,
                        estate.number_of_bathrooms,
                        estate.number_of_bedrooms,
                        &estate.address,
                        pictures,
                    ])?;
                    ids.push(tx.last_insert_rowid());
                }
            }
            tx.commit()?;
            Ok(ids)
        })
    }

    /// Every estate, in insertion order.
    pub fn get_all(&self) -> Result<Vec<Estate>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_ESTATE} ORDER BY id ASC"))?;
            let rows = stmt.query_map([], estate_from_row)?;

            let mut out = Vec::new();
            for r in rows {
                out.push(r?);
            }
            Ok(out)
        })
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Estate>, StoreError> {
        self.db.with_conn(|conn| {
            let estate = conn
                .query_row(
                    &format!("{SELECT_ESTATE} WHERE id = ?1"),
                    params![id],
                    estate_from_row,
                )
                .optional()?;
            Ok(estate)
        })
    }

    pub fn count(&self) -> Result<i64, StoreError> {
        self.db.with_conn(|conn| {
            let n = conn.query_row("SELECT COUNT(*) FROM estates", [], |row| row.get(0))?;
            Ok(n)
        })
    }
}

fn estate_from_row(row: &Row<'_>) -> rusqlite::Result<Estate> {
    let type_name: String = row.get(2)?;
    let estate_type = type_name
        .parse::<EstateType>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, e.into()))?;

    let pictures_json: String = row.get(10)?;
    let pictures: Vec<Picture> = serde_json::from_str(&pictures_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(e)))?;

    Ok(Estate {
        id: row.get(0)?,
        district: row.get(1)?,
        estate_type,
        description: row.get(3)?,
        price: row.get(4)?,
        surface: row.get(5)?,
        number_of_rooms: row.get(6)?,
        number_of_bathrooms: row.get(7)?,
        number_of_bedrooms: row.get(8)?,
        address: row.get(9)?,
        pictures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_db(dir: &tempfile::TempDir) -> Database {
        Database::open(dir.path().join("dao.db")).unwrap().0
    }

    fn sample(district: &str, price: i64) -> Estate {
        Estate {
            district: district.to_string(),
            estate_type: EstateType::House,
            description: "Quiet street".to_string(),
            price,
            surface: 182.5,
            number_of_rooms: 7,
            number_of_bathrooms: 2,
            number_of_bedrooms: 4,
            address: "12 Elm Street".to_string(),
            pictures: vec![
                Picture::new("Front", "https://img.example/front.jpg"),
                Picture::new("Garden", "https://img.example/garden.jpg"),
            ],
            ..Estate::default()
        }
    }

    #[test]
    fn insert_assigns_ids_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_db(&dir);
        let dao = EstateDao::new(&db);

        let ids = dao
            .insert(&[sample("Brooklyn", 1_250_000), sample("Queens", 890_000)])
            .unwrap();
        let more = dao.insert(&[sample("Harlem", 2_100_000)]).unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids[0] < ids[1] && ids[1] < more[0]);

        let all = dao.get_all().unwrap();
        let districts: Vec<_> = all.iter().map(|e| e.district.as_str()).collect();
        assert_eq!(districts, ["Brooklyn", "Queens", "Harlem"]);
        assert_eq!(dao.count().unwrap(), 3);
    }

    #[test]
    fn stored_record_matches_input() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_db(&dir);
        let dao = EstateDao::new(&db);

        let input = sample("Tribeca", 17_870_000);
        let id = dao.insert(std::slice::from_ref(&input)).unwrap()[0];

        let stored = dao.get_by_id(id).unwrap().expect("estate should exist");
        assert_eq!(stored, Estate { id, ..input });
        assert_eq!(stored.thumbnail().unwrap().caption, "Front");
    }

    #[test]
    fn missing_id_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_db(&dir);
        assert_eq!(EstateDao::new(&db).get_by_id(42).unwrap(), None);
    }

    #[test]
    fn corrupt_type_column_surfaces_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_db(&dir);
        let dao = EstateDao::new(&db);
        let id = dao.insert(&[sample("SoHo", 1)]).unwrap()[0];

        db.with_conn(|conn| {
            conn.execute("UPDATE estates SET type = 'Castle' WHERE id = ?1", params![id])?;
            Ok(())
        })
        .unwrap();

        assert!(matches!(dao.get_all(), Err(StoreError::Db(_))));
    }
}
