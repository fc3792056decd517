//! Built-in demo catalog used when the store starts with no products.

use crate::models::{map_category_to_id, Badge, Category, CategoryIcon, Condition, Product, ProductType};

const SEED_CATEGORIES: [(&str, &str, CategoryIcon); 12] = [
    ("iphones", "iPhones", CategoryIcon::Smartphone),
    ("samsung", "Samsung", CategoryIcon::Smartphone),
    ("xiaomi", "Xiaomi | Redmi", CategoryIcon::Smartphone),
    ("motorola", "Motorola", CategoryIcon::Smartphone),
    ("apple-watch", "Apple Watch", CategoryIcon::Watch),
    ("macbooks", "MacBooks", CategoryIcon::Laptop),
    ("ipads", "iPads", CategoryIcon::Laptop),
    ("airpods", "AirPods", CategoryIcon::Headphones),
    ("accesorios", "Accesorios", CategoryIcon::Camera),
    ("audio", "Audio", CategoryIcon::Headphones),
    ("smartwatchs", "Smartwatchs", CategoryIcon::Watch),
    ("gaming", "Gaming", CategoryIcon::Gamepad2),
];

struct SeedProduct {
    id: i64,
    name: &'static str,
    description: &'static str,
    price: f64,
    original_price: Option<f64>,
    stock: u32,
    category: &'static str,
    product_type: ProductType,
    image: &'static str,
    images: &'static [&'static str],
    storage: Option<&'static str>,
    color: Option<&'static str>,
    rating: f32,
    reviews: u32,
    badge: Option<Badge>,
    featured: bool,
}

pub fn default_categories() -> Vec<Category> {
    SEED_CATEGORIES
        .iter()
        .map(|(id, name, icon)| Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: *icon,
            product_count: 0,
        })
        .collect()
}

pub fn demo_products(now: &str) -> Vec<Product> {
    SEED_PRODUCTS
        .iter()
        .map(|seed| Product {
            id: seed.id,
            name: seed.name.to_string(),
            description: Some(seed.description.to_string()),
            price: seed.price,
            original_price: seed.original_price,
            stock: seed.stock,
            category: seed.category.to_string(),
            category_id: map_category_to_id(seed.category),
            product_type: seed.product_type,
            condition: Condition::Nuevo,
            image: seed.image.to_string(),
            images: seed.images.iter().map(|url| url.to_string()).collect(),
            storage: seed.storage.map(str::to_string),
            color: seed.color.map(str::to_string),
            rating: seed.rating,
            reviews: seed.reviews,
            badge: seed.badge,
            featured: seed.featured,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        })
        .collect()
}

const SEED_PRODUCTS: [SeedProduct; 28] = [
    SeedProduct {
        id: 1,
        name: "iPhone 15 Pro Max",
        description: "El iPhone más avanzado con chip A17 Pro, cámara de 48MP y diseño en titanio. Pantalla Super Retina XDR de 6.7 pulgadas.",
        price: 1299000.0,
        original_price: Some(1399000.0),
        stock: 15,
        category: "iPhones",
        product_type: ProductType::Celular,
        image: "https://images.unsplash.com/photo-1695048133142-1a20484d2569?w=400&h=400&fit=crop",
        images: &["https://images.unsplash.com/photo-1695048133142-1a20484d2569?w=400&h=400&fit=crop", "https://images.unsplash.com/photo-1695048133142-1a20484d2569?w=400&h=400&fit=crop"],
        storage: Some("256GB"),
        color: Some("Titanio Natural"),
        rating: 4.9,
        reviews: 234,
        badge: Some(Badge::Bestseller),
        featured: true,
    },
    SeedProduct {
        id: 2,
        name: "iPhone 15 Pro",
        description: "iPhone 15 Pro con diseño en titanio y cámara profesional de 48MP. Sistema de cámaras Pro con teleobjetivo.",
        price: 1099000.0,
        original_price: Some(1199000.0),
        stock: 8,
        category: "iPhones",
        product_type: ProductType::Celular,
        image: "https://images.unsplash.com/photo-1695048133142-1a20484d2569?w=400&h=400&fit=crop",
        images: &["https://images.unsplash.com/photo-1695048133142-1a20484d2569?w=400&h=400&fit=crop"],
        storage: Some("128GB"),
        color: Some("Azul Titanio"),
        rating: 4.8,
        reviews: 189,
        badge: Some(Badge::Sale),
        featured: true,
    },
    SeedProduct {
        id: 3,
        name: "iPhone 14",
        description: "iPhone 14 con chip A15 Bionic y sistema de cámara dual avanzado. Pantalla Super Retina XDR de 6.1 pulgadas.",
        price: 799000.0,
        original_price: Some(899000.0),
        stock: 12,
        category: "iPhones",
        product_type: ProductType::Celular,
        image: "https://images.unsplash.com/photo-1678652197831-2d180705cd2c?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("128GB"),
        color: Some("Púrpura"),
        rating: 4.7,
        reviews: 445,
        badge: Some(Badge::Sale),
        featured: false,
    },
    SeedProduct {
        id: 4,
        name: "iPhone 13",
        description: "iPhone 13 con chip A15 Bionic, sistema de cámara dual y pantalla Super Retina XDR de 6.1 pulgadas.",
        price: 699000.0,
        original_price: Some(799000.0),
        stock: 20,
        category: "iPhones",
        product_type: ProductType::Celular,
        image: "https://images.unsplash.com/photo-1678652197831-2d180705cd2c?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("128GB"),
        color: Some("Rosa"),
        rating: 4.6,
        reviews: 567,
        badge: Some(Badge::Bestseller),
        featured: true,
    },
    SeedProduct {
        id: 5,
        name: "Samsung Galaxy S24 Ultra",
        description: "Galaxy S24 Ultra con S Pen integrado, cámara de 200MP y pantalla Dynamic AMOLED 2X de 6.8 pulgadas.",
        price: 1199000.0,
        original_price: Some(1299000.0),
        stock: 12,
        category: "Samsung",
        product_type: ProductType::Celular,
        image: "https://images.unsplash.com/photo-1610945265064-0e34e5519bbf?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("256GB"),
        color: Some("Titanio Gris"),
        rating: 4.8,
        reviews: 189,
        badge: Some(Badge::New),
        featured: true,
    },
    SeedProduct {
        id: 6,
        name: "Samsung Galaxy S24+",
        description: "Samsung Galaxy S24+ con pantalla Dynamic AMOLED 2X de 6.7 pulgadas y cámara triple de 50MP.",
        price: 899000.0,
        original_price: None,
        stock: 18,
        category: "Samsung",
        product_type: ProductType::Celular,
        image: "https://images.unsplash.com/photo-1610945265064-0e34e5519bbf?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("256GB"),
        color: Some("Violeta"),
        rating: 4.7,
        reviews: 156,
        badge: Some(Badge::Bestseller),
        featured: false,
    },
    SeedProduct {
        id: 7,
        name: "Samsung Galaxy A54 5G",
        description: "Samsung Galaxy A54 5G con triple cámara de 50MP, batería de 5000mAh y pantalla Super AMOLED.",
        price: 449000.0,
        original_price: None,
        stock: 25,
        category: "Samsung",
        product_type: ProductType::Celular,
        image: "https://images.unsplash.com/photo-1610945265064-0e34e5519bbf?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("128GB"),
        color: Some("Violeta Awesome"),
        rating: 4.4,
        reviews: 267,
        badge: Some(Badge::Bestseller),
        featured: true,
    },
    SeedProduct {
        id: 8,
        name: "Xiaomi Redmi Note 13 Pro",
        description: "Xiaomi Redmi Note 13 Pro con cámara de 200MP, carga rápida de 67W y pantalla AMOLED de 6.67 pulgadas.",
        price: 399000.0,
        original_price: Some(449000.0),
        stock: 20,
        category: "Xiaomi",
        product_type: ProductType::Celular,
        image: "https://images.unsplash.com/photo-1598300042247-d088f8ab3a91?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("256GB"),
        color: Some("Azul Océano"),
        rating: 4.6,
        reviews: 312,
        badge: Some(Badge::Sale),
        featured: true,
    },
    SeedProduct {
        id: 9,
        name: "Xiaomi 13T Pro",
        description: "Xiaomi 13T Pro con procesador Dimensity 9200+, cámara Leica de 50MP y carga rápida de 120W.",
        price: 699000.0,
        original_price: None,
        stock: 15,
        category: "Xiaomi",
        product_type: ProductType::Celular,
        image: "https://images.unsplash.com/photo-1598300042247-d088f8ab3a91?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("256GB"),
        color: Some("Negro Meadow"),
        rating: 4.7,
        reviews: 189,
        badge: Some(Badge::New),
        featured: false,
    },
    SeedProduct {
        id: 10,
        name: "Xiaomi Redmi 12",
        description: "Xiaomi Redmi 12 con pantalla de 6.79 pulgadas, cámara de 50MP y batería de 5000mAh.",
        price: 249000.0,
        original_price: None,
        stock: 30,
        category: "Xiaomi",
        product_type: ProductType::Celular,
        image: "https://images.unsplash.com/photo-1598300042247-d088f8ab3a91?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("128GB"),
        color: Some("Azul"),
        rating: 4.3,
        reviews: 445,
        badge: Some(Badge::Bestseller),
        featured: true,
    },
    SeedProduct {
        id: 11,
        name: "Motorola Edge 40 Pro",
        description: "Motorola Edge 40 Pro con pantalla curva de 6.67 pulgadas, carga inalámbrica de 125W y cámara de 50MP.",
        price: 699000.0,
        original_price: None,
        stock: 15,
        category: "Motorola",
        product_type: ProductType::Celular,
        image: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("256GB"),
        color: Some("Negro Lunar"),
        rating: 4.5,
        reviews: 189,
        badge: Some(Badge::New),
        featured: false,
    },
    SeedProduct {
        id: 12,
        name: "Motorola G84 5G",
        description: "Motorola G84 5G con pantalla pOLED de 6.55 pulgadas, cámara de 50MP y batería de 5000mAh.",
        price: 349000.0,
        original_price: None,
        stock: 22,
        category: "Motorola",
        product_type: ProductType::Celular,
        image: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("256GB"),
        color: Some("Azul Medianoche"),
        rating: 4.3,
        reviews: 156,
        badge: Some(Badge::Bestseller),
        featured: true,
    },
    SeedProduct {
        id: 13,
        name: "MacBook Air M3",
        description: "MacBook Air con chip M3, 8GB RAM, pantalla Liquid Retina de 13.6 pulgadas y hasta 18 horas de batería.",
        price: 1499000.0,
        original_price: None,
        stock: 6,
        category: "MacBooks",
        product_type: ProductType::Computadora,
        image: "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("256GB SSD"),
        color: Some("Gris Espacial"),
        rating: 4.9,
        reviews: 123,
        badge: Some(Badge::Pro),
        featured: true,
    },
    SeedProduct {
        id: 14,
        name: "MacBook Pro 14 M3",
        description: "MacBook Pro de 14 pulgadas con chip M3 Pro, pantalla Liquid Retina XDR y hasta 22 horas de batería.",
        price: 2299000.0,
        original_price: None,
        stock: 4,
        category: "MacBooks",
        product_type: ProductType::Computadora,
        image: "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("512GB SSD"),
        color: Some("Gris Espacial"),
        rating: 4.9,
        reviews: 89,
        badge: Some(Badge::Pro),
        featured: false,
    },
    SeedProduct {
        id: 15,
        name: "iPad Air M2",
        description: "iPad Air con chip M2, pantalla Liquid Retina de 10.9 pulgadas y compatibilidad con Apple Pencil Pro.",
        price: 899000.0,
        original_price: None,
        stock: 10,
        category: "iPads",
        product_type: ProductType::Tablet,
        image: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("128GB"),
        color: Some("Azul"),
        rating: 4.8,
        reviews: 156,
        badge: Some(Badge::New),
        featured: false,
    },
    SeedProduct {
        id: 16,
        name: "iPad Pro 12.9 M2",
        description: "iPad Pro de 12.9 pulgadas con chip M2, pantalla Liquid Retina XDR y compatibilidad con Magic Keyboard.",
        price: 1399000.0,
        original_price: None,
        stock: 5,
        category: "iPads",
        product_type: ProductType::Tablet,
        image: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("256GB"),
        color: Some("Gris Espacial"),
        rating: 4.9,
        reviews: 78,
        badge: Some(Badge::Pro),
        featured: true,
    },
    SeedProduct {
        id: 17,
        name: "AirPods Pro 2",
        description: "AirPods Pro de 2da generación con cancelación de ruido activa, audio espacial personalizado y estuche MagSafe.",
        price: 249000.0,
        original_price: Some(279000.0),
        stock: 25,
        category: "AirPods",
        product_type: ProductType::Audio,
        image: "https://images.unsplash.com/photo-1606220945770-b5b6c2c55bf1?w=400&h=400&fit=crop",
        images: &[],
        storage: None,
        color: None,
        rating: 4.7,
        reviews: 456,
        badge: Some(Badge::Sale),
        featured: true,
    },
    SeedProduct {
        id: 18,
        name: "AirPods 3",
        description: "AirPods de 3ra generación con audio espacial, resistencia al agua y hasta 30 horas de batería total.",
        price: 189000.0,
        original_price: None,
        stock: 30,
        category: "AirPods",
        product_type: ProductType::Audio,
        image: "https://images.unsplash.com/photo-1606220945770-b5b6c2c55bf1?w=400&h=400&fit=crop",
        images: &[],
        storage: None,
        color: None,
        rating: 4.5,
        reviews: 234,
        badge: None,
        featured: false,
    },
    SeedProduct {
        id: 19,
        name: "Apple Watch Series 9",
        description: "Apple Watch Series 9 con chip S9, pantalla Always-On Retina más brillante y nuevos gestos con doble toque.",
        price: 449000.0,
        original_price: None,
        stock: 12,
        category: "Apple Watch",
        product_type: ProductType::Smartwatch,
        image: "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("64GB"),
        color: Some("Rosa"),
        rating: 4.8,
        reviews: 189,
        badge: Some(Badge::New),
        featured: false,
    },
    SeedProduct {
        id: 20,
        name: "Apple Watch SE",
        description: "Apple Watch SE con funciones esenciales de salud y fitness, resistencia al agua y GPS integrado.",
        price: 299000.0,
        original_price: None,
        stock: 18,
        category: "Apple Watch",
        product_type: ProductType::Smartwatch,
        image: "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("32GB"),
        color: Some("Luz de las Estrellas"),
        rating: 4.6,
        reviews: 267,
        badge: Some(Badge::Bestseller),
        featured: true,
    },
    SeedProduct {
        id: 21,
        name: "Sony WH-1000XM5",
        description: "Auriculares inalámbricos Sony con cancelación de ruido líder en la industria y hasta 30 horas de batería.",
        price: 399000.0,
        original_price: None,
        stock: 15,
        category: "Audio",
        product_type: ProductType::Audio,
        image: "https://images.unsplash.com/photo-1583394838336-acd977736f90?w=400&h=400&fit=crop",
        images: &[],
        storage: None,
        color: Some("Negro"),
        rating: 4.8,
        reviews: 345,
        badge: Some(Badge::Bestseller),
        featured: false,
    },
    SeedProduct {
        id: 22,
        name: "JBL Charge 5",
        description: "Altavoz Bluetooth portátil JBL con sonido potente, resistencia al agua IP67 y hasta 20 horas de reproducción.",
        price: 149000.0,
        original_price: None,
        stock: 20,
        category: "Audio",
        product_type: ProductType::Audio,
        image: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=400&h=400&fit=crop",
        images: &[],
        storage: None,
        color: Some("Azul"),
        rating: 4.6,
        reviews: 278,
        badge: Some(Badge::Bestseller),
        featured: true,
    },
    SeedProduct {
        id: 23,
        name: "PlayStation 5",
        description: "Consola PlayStation 5 con procesador AMD Zen 2, GPU RDNA 2 y almacenamiento SSD ultrarrápido.",
        price: 699000.0,
        original_price: None,
        stock: 8,
        category: "Gaming",
        product_type: ProductType::Gaming,
        image: "https://images.unsplash.com/photo-1606144042614-b2417e99c4e3?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("825GB SSD"),
        color: Some("Blanco"),
        rating: 4.9,
        reviews: 456,
        badge: Some(Badge::New),
        featured: true,
    },
    SeedProduct {
        id: 24,
        name: "Xbox Series X",
        description: "Consola Xbox Series X con procesador AMD Zen 2, 12 teraflops de potencia gráfica y Quick Resume.",
        price: 649000.0,
        original_price: None,
        stock: 10,
        category: "Gaming",
        product_type: ProductType::Gaming,
        image: "https://images.unsplash.com/photo-1621259182978-fbf93132d53d?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("1TB SSD"),
        color: Some("Negro"),
        rating: 4.8,
        reviews: 389,
        badge: Some(Badge::Pro),
        featured: false,
    },
    SeedProduct {
        id: 25,
        name: "Samsung Galaxy Watch 6",
        description: "Samsung Galaxy Watch 6 con monitoreo avanzado de salud, GPS integrado y hasta 40 horas de batería.",
        price: 349000.0,
        original_price: None,
        stock: 14,
        category: "Smartwatchs",
        product_type: ProductType::Smartwatch,
        image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("16GB"),
        color: Some("Dorado"),
        rating: 4.5,
        reviews: 156,
        badge: None,
        featured: false,
    },
    SeedProduct {
        id: 26,
        name: "Xiaomi Watch S1",
        description: "Xiaomi Watch S1 con pantalla AMOLED de 1.43 pulgadas, GPS dual y más de 117 modos deportivos.",
        price: 199000.0,
        original_price: None,
        stock: 18,
        category: "Smartwatchs",
        product_type: ProductType::Smartwatch,
        image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=400&fit=crop",
        images: &[],
        storage: Some("4GB"),
        color: Some("Negro"),
        rating: 4.3,
        reviews: 234,
        badge: Some(Badge::Bestseller),
        featured: true,
    },
    SeedProduct {
        id: 27,
        name: "MagSafe Charger",
        description: "Cargador inalámbrico MagSafe de Apple para iPhone con alineación magnética perfecta y carga rápida.",
        price: 49000.0,
        original_price: None,
        stock: 35,
        category: "Accesorios",
        product_type: ProductType::Accesorio,
        image: "https://images.unsplash.com/photo-1586953208448-b95a79798f07?w=400&h=400&fit=crop",
        images: &[],
        storage: None,
        color: Some("Blanco"),
        rating: 4.4,
        reviews: 567,
        badge: Some(Badge::Bestseller),
        featured: false,
    },
    SeedProduct {
        id: 28,
        name: "Anker PowerBank 10000mAh",
        description: "Batería portátil Anker de 10000mAh con carga rápida PowerIQ y diseño compacto ultra delgado.",
        price: 79000.0,
        original_price: None,
        stock: 40,
        category: "Accesorios",
        product_type: ProductType::Accesorio,
        image: "https://images.unsplash.com/photo-1609592806596-4b8b5b1b8b1b?w=400&h=400&fit=crop",
        images: &[],
        storage: None,
        color: Some("Negro"),
        rating: 4.6,
        reviews: 789,
        badge: Some(Badge::Bestseller),
        featured: true,
    },
];
