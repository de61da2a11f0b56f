//! Static USDA soil-texture reference shown under every dashboard.

#[derive(Debug, Clone, Copy)]
pub struct TextureClass {
    pub name: &'static str,
    pub definition: &'static str,
}

pub const TEXTURE_INTRO: &str = "The USDA system classifies soil into 12 primary texture classes based on the percentages of sand, silt, and clay. These texture classes are a standard for understanding and communicating soil composition. Here are the different texture classes:";

pub const TEXTURE_CLASSES: [TextureClass; 12] = [
    TextureClass {
        name: "Sand",
        definition: "Contains 85-100% sand, and the percentage of silt plus 1.5 times the percentage of clay is not more than 15.",
    },
    TextureClass {
        name: "Loamy Sand",
        definition: "Contains 70-90% sand, and the percentage of silt plus twice the percentage of clay is 15-30.",
    },
    TextureClass {
        name: "Sandy Loam",
        definition: "Contains less than 30% clay, 50-70% sand, and the remainder is silt.",
    },
    TextureClass {
        name: "Loam",
        definition: "Contains 7-27% clay, less than 52% sand, and 28-50% silt.",
    },
    TextureClass {
        name: "Silt Loam",
        definition: "Contains 50-88% silt, 12-27% clay, and less than 20% sand.",
    },
    TextureClass {
        name: "Silt",
        definition: "Contains 80% or more silt and less than 12% clay.",
    },
    TextureClass {
        name: "Sandy Clay Loam",
        definition: "Contains 20-35% clay, less than 28% silt, and more than 45% sand.",
    },
    TextureClass {
        name: "Clay Loam",
        definition: "Contains 27-40% clay, 20-45% sand, and the remainder is silt.",
    },
    TextureClass {
        name: "Silty Clay Loam",
        definition: "Contains 27-40% clay and 40-73% silt.",
    },
    TextureClass {
        name: "Sandy Clay",
        definition: "Contains 35% or more clay and 45% or more sand.",
    },
    TextureClass {
        name: "Silty Clay",
        definition: "Contains 40% or more clay and 40% or more silt.",
    },
    TextureClass {
        name: "Clay",
        definition: "Contains 40% or more clay, less than 45% sand, and less than 40% silt.",
    },
];

pub const TRIANGLE_USAGE: [&str; 3] = [
    "The Soil Texture Triangle is a tool used to classify the texture class of a soil based on its sand, silt, and clay percentages.",
    "The triangle is divided into various zones, each representing a different texture class.",
    "To classify a soil, plot the percentage of sand on the horizontal axis, the percentage of clay on the left vertical axis, and the percentage of silt on the right vertical axis. The intersection of these three lines indicates the soil's texture class.",
];

/// (heading, explanation)
pub const TEXTURE_IMPLICATIONS: [(&str, &str); 5] = [
    (
        "Water Holding Capacity",
        "Clay soils have high water-holding capacity, while sandy soils have low. This affects the soil's ability to support plant growth.",
    ),
    (
        "Aeration and Drainage",
        "Sandy soils are well-aerated and well-drained, whereas clay soils may suffer from poor drainage and aeration, affecting root development.",
    ),
    (
        "Nutrient Availability",
        "Clay and silt soils are better at holding nutrients than sandy soils, influencing fertilizer management practices.",
    ),
    (
        "Workability",
        "Sandy soils are easier to cultivate than clay soils, which can be hard and cloddy when dry and sticky when wet.",
    ),
    (
        "Erosion Risk",
        "Sandy soils are more prone to erosion than clay or silt soils, impacting land management strategies.",
    ),
];

pub const TRIANGLE_IMAGE_URL: &str = "https://raw.githubusercontent.com/zulianizulkoffli/Soil_Studies_Peninsular_Malaysia/main/Texture_Triangle_USDA.jpg";
