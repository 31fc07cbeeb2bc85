//! Fixed Roblox XML model skeleton.
//!
//! The document shape never varies: one root `ModuleScript` holding exactly
//! three child `ModuleScript` items. Only the root's name and the four module
//! sources are substituted, so the skeleton is kept as six literal fragments
//! surrounding five insertion points instead of going through a template engine.

/// Number of literal fragments in a [`DocumentTemplate`].
pub const FRAGMENT_COUNT: usize = 6;

/// Sequence that closes a CDATA block. Module sources must not contain it.
pub const CDATA_TERMINATOR: &str = "]]>";

/// Root module name used when none (or an empty one) is given.
pub const DEFAULT_ROOT_NAME: &str = "NetShrink";

/// File extension of the written package.
pub const PACKAGE_EXTENSION: &str = "rbxmx";

/// Immutable document skeleton.
///
/// Fragment `i` precedes insertion point `i`; the last fragment closes the
/// document. Insertion points, in order: root source, root name, then the
/// `Compression`, `Decode` and `Encode` child sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentTemplate {
    fragments: [&'static str; FRAGMENT_COUNT],
    default_name: &'static str,
    extension: &'static str,
}

impl DocumentTemplate {
    /// Creates a template from its literal fragments.
    pub const fn new(
        fragments: [&'static str; FRAGMENT_COUNT],
        default_name: &'static str,
        extension: &'static str,
    ) -> Self {
        Self {
            fragments,
            default_name,
            extension,
        }
    }

    /// Returns the literal fragments in document order.
    pub fn fragments(&self) -> &[&'static str; FRAGMENT_COUNT] {
        &self.fragments
    }

    /// Returns the name substituted when the caller supplies none.
    pub fn default_name(&self) -> &'static str {
        self.default_name
    }

    /// Returns the output file extension (without the dot).
    pub fn extension(&self) -> &'static str {
        self.extension
    }

    /// Picks the caller's name, falling back to the default when absent or empty.
    pub fn resolve_name<'a>(&self, name: Option<&'a str>) -> &'a str {
        match name {
            Some(name) if !name.is_empty() => name,
            _ => self.default_name,
        }
    }

    /// Total byte length of the literal text.
    pub fn literal_len(&self) -> usize {
        self.fragments.iter().map(|f| f.len()).sum()
    }
}

/// The NetShrink model: `NetShrink` root with `Compression`, `Decode` and
/// `Encode` children. Child names, referents and script GUIDs are fixed.
pub const ROBLOX_MODEL: DocumentTemplate = DocumentTemplate::new(
    [
        ROOT_OPEN,
        ROOT_NAME_OPEN,
        COMPRESSION_OPEN,
        DECODE_OPEN,
        ENCODE_OPEN,
        MODEL_CLOSE,
    ],
    DEFAULT_ROOT_NAME,
    PACKAGE_EXTENSION,
);

/// Model header through the opening of the root module's CDATA source block.
const ROOT_OPEN: &str = r#"<roblox xmlns:xmime="http://www.w3.org/2005/05/xmlmime" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="http://www.roblox.com/roblox.xsd" version="4">
	<Meta name="ExplicitAutoJoints">true</Meta>
	<External>null</External>
	<External>nil</External>
	<Item class="ModuleScript" referent="RBXCF9A5091F9304DA1967DA407EE4E9DD7">
		<Properties>
			<Content name="LinkedSource"><null></null></Content>
			<ProtectedString name="Source"><![CDATA["#;

/// Closes the root source and opens the root `Name` property.
const ROOT_NAME_OPEN: &str = r#"]]></ProtectedString>
			<string name="ScriptGuid">{811C51CF-A729-449F-AF3D-49CFE1D59C1E}</string>
			<BinaryString name="AttributesSerialize"></BinaryString>
			<SecurityCapabilities name="Capabilities">0</SecurityCapabilities>
			<bool name="DefinesCapabilities">false</bool>
			<string name="Name">"#;

/// Closes the root name and opens the `Compression` child's source block.
const COMPRESSION_OPEN: &str = r#"</string>
			<int64 name="SourceAssetId">-1</int64>
			<BinaryString name="Tags"></BinaryString>
		</Properties>
		<Item class="ModuleScript" referent="RBX67148BA2C72C42B48CC7C6F742EF4E15">
			<Properties>
				<Content name="LinkedSource"><null></null></Content>
				<ProtectedString name="Source"><![CDATA["#;

/// Closes `Compression` and opens the `Decode` child's source block.
const DECODE_OPEN: &str = r#"]]></ProtectedString>
				<string name="ScriptGuid">{74984691-70D0-42B0-818C-7588B08C92EE}</string>
				<BinaryString name="AttributesSerialize"></BinaryString>
				<SecurityCapabilities name="Capabilities">0</SecurityCapabilities>
				<bool name="DefinesCapabilities">false</bool>
				<string name="Name">Compression</string>
				<int64 name="SourceAssetId">-1</int64>
				<BinaryString name="Tags"></BinaryString>
			</Properties>
		</Item>
		<Item class="ModuleScript" referent="RBX06C6093F93AD48028BFF0445BC25EACA">
			<Properties>
				<Content name="LinkedSource"><null></null></Content>
				<ProtectedString name="Source"><![CDATA["#;

/// Closes `Decode` and opens the `Encode` child's source block.
const ENCODE_OPEN: &str = r#"]]></ProtectedString>
				<string name="ScriptGuid">{3D83CB4F-02AA-4BC5-AEE4-17BA40F5F471}</string>
				<BinaryString name="AttributesSerialize"></BinaryString>
				<SecurityCapabilities name="Capabilities">0</SecurityCapabilities>
				<bool name="DefinesCapabilities">false</bool>
				<string name="Name">Decode</string>
				<int64 name="SourceAssetId">-1</int64>
				<BinaryString name="Tags"></BinaryString>
			</Properties>
		</Item>
		<Item class="ModuleScript" referent="RBX39B8037F67F64A0885BE2BAA9DD59CAB">
			<Properties>
				<Content name="LinkedSource"><null></null></Content>
				<ProtectedString name="Source"><![CDATA["#;

/// Closes `Encode`, the root item and the model.
const MODEL_CLOSE: &str = r#"]]></ProtectedString>
				<string name="ScriptGuid">{3C215ACC-D38D-490B-A659-A74693B63087}</string>
				<BinaryString name="AttributesSerialize"></BinaryString>
				<SecurityCapabilities name="Capabilities">0</SecurityCapabilities>
				<bool name="DefinesCapabilities">false</bool>
				<string name="Name">Encode</string>
				<int64 name="SourceAssetId">-1</int64>
				<BinaryString name="Tags"></BinaryString>
			</Properties>
		</Item>
	</Item>
</roblox>"#;
