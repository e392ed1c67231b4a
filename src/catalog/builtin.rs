//! The stock node catalog.
//!
//! Node kinds themselves live outside this crate; this table only describes
//! how they are grouped in the add menu.

use super::descriptor::{CatalogEntry, Category};
use crate::error::Result;

/// Node tree type the stock add menu is shown for.
pub const DEFAULT_TREE_TYPE: &str = "umog_UMOGNodeTree";

struct CategorySpec {
    key: &'static str,
    menu_id: &'static str,
    label: &'static str,
    description: &'static str,
    icon: &'static str,
    nodes: &'static [(&'static str, &'static str)],
}

const ALGORITHM: CategorySpec = CategorySpec {
    key: "algorithm_menu",
    menu_id: "umog_algorithm_menu",
    label: "Algorithm",
    description: "Nodes for systems",
    icon: "STICKY_UVS_LOC",
    nodes: &[
        ("umog_ReactionDiffusionBGLNode", "Reaction Diffusion Node"),
        ("umog_ConvolveNode", "Convolve"),
        ("umog_ConvolveGLNode", "Convolve opengl"),
    ],
};

const MESH: CategorySpec = CategorySpec {
    key: "mesh_menu",
    menu_id: "umog_mesh_menu",
    label: "Mesh",
    description: "Nodes that deal with meshes",
    icon: "MESH_UVSPHERE",
    nodes: &[
        ("umog_GetMeshNode", "Get Mesh"),
        ("umog_SetMeshNode", "Set Mesh"),
        ("umog_DisplaceNode", "Displace Node"),
    ],
};

const MATH: CategorySpec = CategorySpec {
    key: "math_menu",
    menu_id: "umog_math_menu",
    label: "Math",
    description: "",
    icon: "LINENUMBERS_ON",
    nodes: &[
        ("umog_AddNode", "Add"),
        ("umog_SubtractNode", "Subtract"),
        ("umog_MultiplyNode", "Multiply"),
        ("umog_DivideNode", "Divide"),
        ("umog_NegateNode", "Negate"),
        ("umog_NumberNode", "Number"),
    ],
};

const INTEGER: CategorySpec = CategorySpec {
    key: "integer_menu",
    menu_id: "umog_integer_menu",
    label: "Integer",
    description: "Nodes that operate on integers",
    icon: "LINENUMBERS_ON",
    nodes: &[
        ("umog_IntegerNode", "Integer"),
        ("umog_IntegerFrameNode", "Integer Frame"),
        ("umog_IntegerSubframeNode", "Integer Subframe"),
        ("umog_IntegerMathNode", "Integer Math"),
    ],
};

const MATRIX: CategorySpec = CategorySpec {
    key: "matrix_menu",
    menu_id: "umog_matrix_menu",
    label: "Matrix",
    description: "Nodes that operate on matrices",
    icon: "MESH_GRID",
    nodes: &[
        ("umog_Mat3Node", "Matrix 3x3 Node"),
        ("umog_MatrixMathNode", "Matrix Math"),
        ("umog_GaussNode", "Gaussian Blur"),
        ("umog_LaplaceNode", "Laplacian Filter"),
    ],
};

const TEXTURE: CategorySpec = CategorySpec {
    key: "texture_menu",
    menu_id: "umog_texture_menu",
    label: "Texture",
    description: "Nodes that operate on Textures",
    icon: "IMGDISPLAY",
    nodes: &[
        ("umog_GetTextureNode", "Get Texture"),
        ("umog_SetTextureNode", "Set Texture"),
        ("umog_SaveTextureNode", "Save Texture"),
        ("umog_LoadTextureNode", "Load Texture(s)"),
        ("umog_TextureAlternatorNode", "Texture Alternator"),
    ],
};

impl CategorySpec {
    fn entry(&self) -> Result<CatalogEntry> {
        let category = Category::from_pairs(self.menu_id, self.label, self.nodes)?
            .with_description(self.description)
            .with_icon(self.icon);
        Ok(CatalogEntry::new(self.key, category))
    }
}

/// Returns the stock catalog in display order.
///
/// Older releases keyed every separator the same way, so only the first two
/// dividers survived and Matrix ran straight into Texture. Each separator now
/// has its own key and all three are drawn.
pub fn builtin_catalog() -> Result<Vec<CatalogEntry>> {
    Ok(vec![
        ALGORITHM.entry()?,
        CatalogEntry::separator("separator_1"),
        MESH.entry()?,
        CatalogEntry::separator("separator_2"),
        MATH.entry()?,
        INTEGER.entry()?,
        MATRIX.entry()?,
        CatalogEntry::separator("separator_3"),
        TEXTURE.entry()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NodeTypeRegistry;

    #[test]
    fn test_builtin_catalog_registers() {
        let mut registry = NodeTypeRegistry::new();
        for entry in builtin_catalog().unwrap() {
            registry.register_entry(entry).unwrap();
        }

        assert_eq!(registry.len(), 9);
        assert_eq!(registry.categories().count(), 6);
        assert_eq!(registry.node_types().count(), 25);
    }

    #[test]
    fn test_builtin_catalog_layout() {
        let labels: Vec<String> = builtin_catalog()
            .unwrap()
            .iter()
            .map(|e| match e.entry.as_category() {
                Some(category) => category.label.clone(),
                None => "|".to_string(),
            })
            .collect();
        assert_eq!(
            labels,
            vec!["Algorithm", "|", "Mesh", "|", "Math", "Integer", "Matrix", "|", "Texture"]
        );
    }

    #[test]
    fn test_math_category_order() {
        let catalog = builtin_catalog().unwrap();
        let math = catalog
            .iter()
            .find(|e| e.key == "math_menu")
            .and_then(|e| e.entry.as_category())
            .unwrap();
        let labels: Vec<&str> = math.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Add", "Subtract", "Multiply", "Divide", "Negate", "Number"]);
        assert_eq!(math.icon, "LINENUMBERS_ON");
    }
}
