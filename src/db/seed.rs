// Listings inserted the first time the database file is created.
use crate::domain::{Estate, EstateType, Picture};

const LOREM_IPSUM: [&str; 3] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Praesent id lacus ac \
     nulla aliquet tincidunt. Sed tempor, justo vitae faucibus posuere, ipsum sem \
     aliquam lectus, sit amet tristique magna nisi eget nisl.",
    "Vestibulum ante ipsum primis in faucibus orci luctus et ultrices posuere cubilia \
     curae; Integer vel nisi quis est hendrerit volutpat. Nam at ex non urna tempus \
     efficitur vitae in felis.",
    "Curabitur dignissim, lorem a fermentum elementum, velit turpis congue mauris, \
     quis tristique arcu libero sed justo. Donec vel orci ut lectus dictum aliquet.",
];

fn pictures(photos: &[(&str, &str)]) -> Vec<Picture> {
    photos
        .iter()
        .map(|(caption, uri)| Picture::new(*caption, *uri))
        .collect()
}

/// The fixed seed dataset.
pub fn estate_list() -> Vec<Estate> {
    vec![
        Estate {
            district: "Manhattan".into(),
            estate_type: EstateType::Flat,
            description: LOREM_IPSUM[0].into(),
            price: 17_870_000,
            surface: 750.0,
            number_of_rooms: 8,
            number_of_bathrooms: 2,
            number_of_bedrooms: 4,
            address: "740 Park Avenue, Apt 6/7A, New York, NY 10021".into(),
            pictures: pictures(&[
                ("Living room", "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688"),
                ("Kitchen", "https://images.unsplash.com/photo-1556911220-bff31c812dba"),
                ("Bedroom", "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85"),
            ]),
            ..Estate::default()
        },
        Estate {
            district: "Brooklyn".into(),
            estate_type: EstateType::House,
            description: LOREM_IPSUM[1].into(),
            price: 2_450_000,
            surface: 310.0,
            number_of_rooms: 9,
            number_of_bathrooms: 3,
            number_of_bedrooms: 5,
            address: "112 Willow Street, Brooklyn, NY 11201".into(),
            pictures: pictures(&[
                ("Facade", "https://images.unsplash.com/photo-1568605114967-8130f3a36994"),
                ("Garden", "https://images.unsplash.com/photo-1558036117-15d82a90b9b1"),
            ]),
            ..Estate::default()
        },
        Estate {
            district: "Queens".into(),
            estate_type: EstateType::Duplex,
            description: LOREM_IPSUM[2].into(),
            price: 1_130_000,
            surface: 165.0,
            number_of_rooms: 6,
            number_of_bathrooms: 2,
            number_of_bedrooms: 3,
            address: "23-15 31st Road, Astoria, NY 11106".into(),
            pictures: pictures(&[
                ("Lounge", "https://images.unsplash.com/photo-1493809842364-78817add7ffb"),
                ("Terrace", "https://images.unsplash.com/photo-1600585154340-be6161a56a0c"),
            ]),
            ..Estate::default()
        },
        Estate {
            district: "Tribeca".into(),
            estate_type: EstateType::Penthouse,
            description: LOREM_IPSUM[0].into(),
            price: 21_500_000,
            surface: 540.0,
            number_of_rooms: 7,
            number_of_bathrooms: 4,
            number_of_bedrooms: 4,
            address: "443 Greenwich Street, PH-A, New York, NY 10013".into(),
            pictures: pictures(&[
                ("Roof deck", "https://images.unsplash.com/photo-1512917774080-9991f1c4c750"),
                ("Dining room", "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0"),
                ("Master bath", "https://images.unsplash.com/photo-1584622650111-993a426fbf0a"),
            ]),
            ..Estate::default()
        },
        Estate {
            district: "SoHo".into(),
            estate_type: EstateType::Loft,
            description: LOREM_IPSUM[1].into(),
            price: 4_995_000,
            surface: 280.0,
            number_of_rooms: 5,
            number_of_bathrooms: 2,
            number_of_bedrooms: 2,
            address: "96 Greene Street, New York, NY 10012".into(),
            pictures: pictures(&[
                ("Open space", "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2"),
                ("Studio", "https://images.unsplash.com/photo-1536376072261-38c75010e6c9"),
            ]),
            ..Estate::default()
        },
        Estate {
            district: "Staten Island".into(),
            estate_type: EstateType::House,
            description: LOREM_IPSUM[2].into(),
            price: 785_000,
            surface: 205.0,
            number_of_rooms: 7,
            number_of_bathrooms: 2,
            number_of_bedrooms: 4,
            address: "57 Harbor Road, Staten Island, NY 10303".into(),
            pictures: pictures(&[
                ("Porch", "https://images.unsplash.com/photo-1570129477492-45c003edd2be"),
                ("Backyard", "https://images.unsplash.com/photo-1564013799919-ab600027ffc6"),
            ]),
            ..Estate::default()
        },
    ]
}
