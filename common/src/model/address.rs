use crate::model::image::ImageMeta;
use crate::requests::{AddressPatch, NewAddress};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A contact entry of the address book, the only persisted entity.
///
/// Records are stored as JSON documents in the `myaddresses` collection and are
/// returned to clients in the same shape. Apart from `id` (assigned by the
/// store) and `image.created_at`, no field has a server-side default: a field
/// the client never sent is simply absent from the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Opaque identifier (UUID v4) generated when the record is created.
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Serialized as `Telephone`, the key used by existing clients.
    #[serde(
        rename = "Telephone",
        alias = "telephone",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub telephone: Option<String>,

    /// Any JSON number. Integers are kept as integers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Present only when a file was uploaded together with the create request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageMeta>,
}

impl AddressRecord {
    /// Builds a new record from the create payload.
    pub fn new(id: String, fields: NewAddress, image: Option<ImageMeta>) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            telephone: fields.telephone,
            mobile: fields.mobile,
            address: fields.address,
            image,
        }
    }

    /// Shallow merge of a partial update.
    ///
    /// Fields set in the patch overwrite the stored value (an explicit `null`
    /// clears it); fields the patch does not mention are left untouched.
    pub fn apply(&mut self, patch: AddressPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(telephone) = patch.telephone {
            self.telephone = telephone;
        }
        if let Some(mobile) = patch.mobile {
            self.mobile = mobile;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
    }
}
