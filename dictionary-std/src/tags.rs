//! Data element tag declarations and the standard attribute table.
//!
//! Each attribute of the table is also exposed as a constant
//! named after its keyword in SCREAMING_SNAKE_CASE.
//! Repeating attributes (such as the overlay and curve groups)
//! are declared with the lowest tag they can take.
//!
//! The table covers a curated subset of [DICOM PS3.6] and PS3.7:
//! command and file meta elements, the directory elements,
//! the general study, series, image and pixel modules,
//! and the retired overlay, curve and compression groups.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html

use dicom_dictionary_core::dictionary::{DataDictionaryEntryRef, TagPattern, VirtualVr};
use dicom_dictionary_core::header::Tag;

type E = DataDictionaryEntryRef<'static>;

/// Command Group Length (0000,0000) UL
#[rustfmt::skip]
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);
/// Command Length to End (0000,0001) UL (Retired)
#[rustfmt::skip]
pub const COMMAND_LENGTH_TO_END: Tag = Tag(0x0000, 0x0001);
/// Affected SOP Class UID (0000,0002) UI
#[rustfmt::skip]
pub const AFFECTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0002);
/// Requested SOP Class UID (0000,0003) UI
#[rustfmt::skip]
pub const REQUESTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0003);
/// Command Recognition Code (0000,0010) SH (Retired)
#[rustfmt::skip]
pub const COMMAND_RECOGNITION_CODE: Tag = Tag(0x0000, 0x0010);
/// Command Field (0000,0100) US
#[rustfmt::skip]
pub const COMMAND_FIELD: Tag = Tag(0x0000, 0x0100);
/// Message ID (0000,0110) US
#[rustfmt::skip]
pub const MESSAGE_ID: Tag = Tag(0x0000, 0x0110);
/// Message ID Being Responded To (0000,0120) US
#[rustfmt::skip]
pub const MESSAGE_ID_BEING_RESPONDED_TO: Tag = Tag(0x0000, 0x0120);
/// Initiator (0000,0200) AE (Retired)
#[rustfmt::skip]
pub const INITIATOR: Tag = Tag(0x0000, 0x0200);
/// Receiver (0000,0300) AE (Retired)
#[rustfmt::skip]
pub const RECEIVER: Tag = Tag(0x0000, 0x0300);
/// Find Location (0000,0400) AE (Retired)
#[rustfmt::skip]
pub const FIND_LOCATION: Tag = Tag(0x0000, 0x0400);
/// Move Destination (0000,0600) AE
#[rustfmt::skip]
pub const MOVE_DESTINATION: Tag = Tag(0x0000, 0x0600);
/// Priority (0000,0700) US
#[rustfmt::skip]
pub const PRIORITY: Tag = Tag(0x0000, 0x0700);
/// Command Data Set Type (0000,0800) US
#[rustfmt::skip]
pub const COMMAND_DATA_SET_TYPE: Tag = Tag(0x0000, 0x0800);
/// Number of Matches (0000,0850) US (Retired)
#[rustfmt::skip]
pub const NUMBER_OF_MATCHES: Tag = Tag(0x0000, 0x0850);
/// Response Sequence Number (0000,0860) US (Retired)
#[rustfmt::skip]
pub const RESPONSE_SEQUENCE_NUMBER: Tag = Tag(0x0000, 0x0860);
/// Status (0000,0900) US
#[rustfmt::skip]
pub const STATUS: Tag = Tag(0x0000, 0x0900);
/// Offending Element (0000,0901) AT
#[rustfmt::skip]
pub const OFFENDING_ELEMENT: Tag = Tag(0x0000, 0x0901);
/// Error Comment (0000,0902) LO
#[rustfmt::skip]
pub const ERROR_COMMENT: Tag = Tag(0x0000, 0x0902);
/// Error ID (0000,0903) US
#[rustfmt::skip]
pub const ERROR_ID: Tag = Tag(0x0000, 0x0903);
/// Affected SOP Instance UID (0000,1000) UI
#[rustfmt::skip]
pub const AFFECTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1000);
/// Requested SOP Instance UID (0000,1001) UI
#[rustfmt::skip]
pub const REQUESTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1001);
/// Event Type ID (0000,1002) US
#[rustfmt::skip]
pub const EVENT_TYPE_ID: Tag = Tag(0x0000, 0x1002);
/// Attribute Identifier List (0000,1005) AT
#[rustfmt::skip]
pub const ATTRIBUTE_IDENTIFIER_LIST: Tag = Tag(0x0000, 0x1005);
/// Action Type ID (0000,1008) US
#[rustfmt::skip]
pub const ACTION_TYPE_ID: Tag = Tag(0x0000, 0x1008);
/// Number of Remaining Sub-operations (0000,1020) US
#[rustfmt::skip]
pub const NUMBER_OF_REMAINING_SUBOPERATIONS: Tag = Tag(0x0000, 0x1020);
/// Number of Completed Sub-operations (0000,1021) US
#[rustfmt::skip]
pub const NUMBER_OF_COMPLETED_SUBOPERATIONS: Tag = Tag(0x0000, 0x1021);
/// Number of Failed Sub-operations (0000,1022) US
#[rustfmt::skip]
pub const NUMBER_OF_FAILED_SUBOPERATIONS: Tag = Tag(0x0000, 0x1022);
/// Number of Warning Sub-operations (0000,1023) US
#[rustfmt::skip]
pub const NUMBER_OF_WARNING_SUBOPERATIONS: Tag = Tag(0x0000, 0x1023);
/// Move Originator Application Entity Title (0000,1030) AE
#[rustfmt::skip]
pub const MOVE_ORIGINATOR_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0000, 0x1030);
/// Move Originator Message ID (0000,1031) US
#[rustfmt::skip]
pub const MOVE_ORIGINATOR_MESSAGE_ID: Tag = Tag(0x0000, 0x1031);
/// Dialog Receiver (0000,4000) LT (Retired)
#[rustfmt::skip]
pub const DIALOG_RECEIVER: Tag = Tag(0x0000, 0x4000);
/// Terminal Type (0000,4010) LT (Retired)
#[rustfmt::skip]
pub const TERMINAL_TYPE: Tag = Tag(0x0000, 0x4010);
/// Message Set ID (0000,5010) SH (Retired)
#[rustfmt::skip]
pub const MESSAGE_SET_ID: Tag = Tag(0x0000, 0x5010);
/// End Message ID (0000,5020) SH (Retired)
#[rustfmt::skip]
pub const END_MESSAGE_ID: Tag = Tag(0x0000, 0x5020);
/// Display Format (0000,5110) LT (Retired)
#[rustfmt::skip]
pub const DISPLAY_FORMAT: Tag = Tag(0x0000, 0x5110);
/// Page Position ID (0000,5120) LT (Retired)
#[rustfmt::skip]
pub const PAGE_POSITION_ID: Tag = Tag(0x0000, 0x5120);
/// Text Format ID (0000,5130) CS (Retired)
#[rustfmt::skip]
pub const TEXT_FORMAT_ID: Tag = Tag(0x0000, 0x5130);
/// Normal/Reverse (0000,5140) CS (Retired)
#[rustfmt::skip]
pub const NORMAL_REVERSE: Tag = Tag(0x0000, 0x5140);
/// Add Gray Scale (0000,5150) CS (Retired)
#[rustfmt::skip]
pub const ADD_GRAY_SCALE: Tag = Tag(0x0000, 0x5150);
/// Borders (0000,5160) CS (Retired)
#[rustfmt::skip]
pub const BORDERS: Tag = Tag(0x0000, 0x5160);
/// Copies (0000,5170) IS (Retired)
#[rustfmt::skip]
pub const COPIES: Tag = Tag(0x0000, 0x5170);
/// Command Magnification Type (0000,5180) CS (Retired)
#[rustfmt::skip]
pub const COMMAND_MAGNIFICATION_TYPE: Tag = Tag(0x0000, 0x5180);
/// Erase (0000,5190) CS (Retired)
#[rustfmt::skip]
pub const ERASE: Tag = Tag(0x0000, 0x5190);
/// Print (0000,51A0) CS (Retired)
#[rustfmt::skip]
pub const PRINT: Tag = Tag(0x0000, 0x51A0);
/// Overlays (0000,51B0) US (Retired)
#[rustfmt::skip]
pub const OVERLAYS: Tag = Tag(0x0000, 0x51B0);
/// File Meta Information Group Length (0002,0000) UL
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// File Meta Information Version (0002,0001) OB
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// Media Storage SOP Class UID (0002,0002) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// Media Storage SOP Instance UID (0002,0003) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// Transfer Syntax UID (0002,0010) UI
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// Implementation Class UID (0002,0012) UI
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// Implementation Version Name (0002,0013) SH
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// Source Application Entity Title (0002,0016) AE
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// Sending Application Entity Title (0002,0017) AE
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// Receiving Application Entity Title (0002,0018) AE
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// Source Presentation Address (0002,0026) UR
#[rustfmt::skip]
pub const SOURCE_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0026);
/// Sending Presentation Address (0002,0027) UR
#[rustfmt::skip]
pub const SENDING_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0027);
/// Receiving Presentation Address (0002,0028) UR
#[rustfmt::skip]
pub const RECEIVING_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0028);
/// RTV Meta Information Version (0002,0031) OB
#[rustfmt::skip]
pub const RTV_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0031);
/// RTV Communication SOP Class UID (0002,0032) UI
#[rustfmt::skip]
pub const RTV_COMMUNICATION_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0032);
/// RTV Communication SOP Instance UID (0002,0033) UI
#[rustfmt::skip]
pub const RTV_COMMUNICATION_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0033);
/// RTV Source Identifier (0002,0035) OB
#[rustfmt::skip]
pub const RTV_SOURCE_IDENTIFIER: Tag = Tag(0x0002, 0x0035);
/// RTV Flow Identifier (0002,0036) OB
#[rustfmt::skip]
pub const RTV_FLOW_IDENTIFIER: Tag = Tag(0x0002, 0x0036);
/// RTV Flow RTP Sampling Rate (0002,0037) UL
#[rustfmt::skip]
pub const RTV_FLOW_RTP_SAMPLING_RATE: Tag = Tag(0x0002, 0x0037);
/// RTV Flow Actual Frame Duration (0002,0038) FD
#[rustfmt::skip]
pub const RTV_FLOW_ACTUAL_FRAME_DURATION: Tag = Tag(0x0002, 0x0038);
/// Private Information Creator UID (0002,0100) UI
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// Private Information (0002,0102) OB
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// File-set ID (0004,1130) CS
#[rustfmt::skip]
pub const FILE_SET_ID: Tag = Tag(0x0004, 0x1130);
/// File-set Descriptor File ID (0004,1141) CS
#[rustfmt::skip]
pub const FILE_SET_DESCRIPTOR_FILE_ID: Tag = Tag(0x0004, 0x1141);
/// Specific Character Set of File-set Descriptor File (0004,1142) CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET_OF_FILE_SET_DESCRIPTOR_FILE: Tag = Tag(0x0004, 0x1142);
/// Offset of the First Directory Record of the Root Directory Entity (0004,1200) UL
#[rustfmt::skip]
pub const OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1200);
/// Offset of the Last Directory Record of the Root Directory Entity (0004,1202) UL
#[rustfmt::skip]
pub const OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1202);
/// File-set Consistency Flag (0004,1212) US
#[rustfmt::skip]
pub const FILE_SET_CONSISTENCY_FLAG: Tag = Tag(0x0004, 0x1212);
/// Directory Record Sequence (0004,1220) SQ
#[rustfmt::skip]
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
/// Offset of the Next Directory Record (0004,1400) UL
#[rustfmt::skip]
pub const OFFSET_OF_THE_NEXT_DIRECTORY_RECORD: Tag = Tag(0x0004, 0x1400);
/// Record In-use Flag (0004,1410) US
#[rustfmt::skip]
pub const RECORD_IN_USE_FLAG: Tag = Tag(0x0004, 0x1410);
/// Offset of Referenced Lower-Level Directory Entity (0004,1420) UL
#[rustfmt::skip]
pub const OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1420);
/// Directory Record Type (0004,1430) CS
#[rustfmt::skip]
pub const DIRECTORY_RECORD_TYPE: Tag = Tag(0x0004, 0x1430);
/// Private Record UID (0004,1432) UI
#[rustfmt::skip]
pub const PRIVATE_RECORD_UID: Tag = Tag(0x0004, 0x1432);
/// Referenced File ID (0004,1500) CS
#[rustfmt::skip]
pub const REFERENCED_FILE_ID: Tag = Tag(0x0004, 0x1500);
/// MRDR Directory Record Offset (0004,1504) UL (Retired)
#[rustfmt::skip]
pub const MRDR_DIRECTORY_RECORD_OFFSET: Tag = Tag(0x0004, 0x1504);
/// Referenced SOP Class UID in File (0004,1510) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x1510);
/// Referenced SOP Instance UID in File (0004,1511) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID_IN_FILE: Tag = Tag(0x0004, 0x1511);
/// Referenced Transfer Syntax UID in File (0004,1512) UI
#[rustfmt::skip]
pub const REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE: Tag = Tag(0x0004, 0x1512);
/// Referenced Related General SOP Class UID in File (0004,151A) UI
#[rustfmt::skip]
pub const REFERENCED_RELATED_GENERAL_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x151A);
/// Number of References (0004,1600) UL (Retired)
#[rustfmt::skip]
pub const NUMBER_OF_REFERENCES: Tag = Tag(0x0004, 0x1600);
/// Length to End (0008,0001) UL (Retired)
#[rustfmt::skip]
pub const LENGTH_TO_END: Tag = Tag(0x0008, 0x0001);
/// Specific Character Set (0008,0005) CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// Language Code Sequence (0008,0006) SQ
#[rustfmt::skip]
pub const LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0006);
/// Image Type (0008,0008) CS
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// Recognition Code (0008,0010) SH (Retired)
#[rustfmt::skip]
pub const RECOGNITION_CODE: Tag = Tag(0x0008, 0x0010);
/// Instance Creation Date (0008,0012) DA
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// Instance Creation Time (0008,0013) TM
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// Instance Creator UID (0008,0014) UI
#[rustfmt::skip]
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// Instance Coercion DateTime (0008,0015) DT
#[rustfmt::skip]
pub const INSTANCE_COERCION_DATE_TIME: Tag = Tag(0x0008, 0x0015);
/// SOP Class UID (0008,0016) UI
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOP Instance UID (0008,0018) UI
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// Related General SOP Class UID (0008,001A) UI
#[rustfmt::skip]
pub const RELATED_GENERAL_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001A);
/// Original Specialized SOP Class UID (0008,001B) UI
#[rustfmt::skip]
pub const ORIGINAL_SPECIALIZED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001B);
/// Study Date (0008,0020) DA
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// Series Date (0008,0021) DA
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// Acquisition Date (0008,0022) DA
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// Content Date (0008,0023) DA
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// Overlay Date (0008,0024) DA (Retired)
#[rustfmt::skip]
pub const OVERLAY_DATE: Tag = Tag(0x0008, 0x0024);
/// Curve Date (0008,0025) DA (Retired)
#[rustfmt::skip]
pub const CURVE_DATE: Tag = Tag(0x0008, 0x0025);
/// Acquisition DateTime (0008,002A) DT
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// Study Time (0008,0030) TM
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// Series Time (0008,0031) TM
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// Acquisition Time (0008,0032) TM
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// Content Time (0008,0033) TM
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// Overlay Time (0008,0034) TM (Retired)
#[rustfmt::skip]
pub const OVERLAY_TIME: Tag = Tag(0x0008, 0x0034);
/// Curve Time (0008,0035) TM (Retired)
#[rustfmt::skip]
pub const CURVE_TIME: Tag = Tag(0x0008, 0x0035);
/// Data Set Type (0008,0040) US (Retired)
#[rustfmt::skip]
pub const DATA_SET_TYPE: Tag = Tag(0x0008, 0x0040);
/// Data Set Subtype (0008,0041) LO (Retired)
#[rustfmt::skip]
pub const DATA_SET_SUBTYPE: Tag = Tag(0x0008, 0x0041);
/// Nuclear Medicine Series Type (0008,0042) CS (Retired)
#[rustfmt::skip]
pub const NUCLEAR_MEDICINE_SERIES_TYPE: Tag = Tag(0x0008, 0x0042);
/// Accession Number (0008,0050) SH
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Query/Retrieve Level (0008,0052) CS
#[rustfmt::skip]
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// Retrieve AE Title (0008,0054) AE
#[rustfmt::skip]
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// Instance Availability (0008,0056) CS
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// Failed SOP Instance UID List (0008,0058) UI
#[rustfmt::skip]
pub const FAILED_SOP_INSTANCE_UID_LIST: Tag = Tag(0x0008, 0x0058);
/// Modality (0008,0060) CS
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Modalities in Study (0008,0061) CS
#[rustfmt::skip]
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// SOP Classes in Study (0008,0062) UI
#[rustfmt::skip]
pub const SOP_CLASSES_IN_STUDY: Tag = Tag(0x0008, 0x0062);
/// Conversion Type (0008,0064) CS
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Presentation Intent Type (0008,0068) CS
#[rustfmt::skip]
pub const PRESENTATION_INTENT_TYPE: Tag = Tag(0x0008, 0x0068);
/// Manufacturer (0008,0070) LO
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// Institution Name (0008,0080) LO
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// Institution Address (0008,0081) ST
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// Institution Code Sequence (0008,0082) SQ
#[rustfmt::skip]
pub const INSTITUTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0082);
/// Referring Physician's Name (0008,0090) PN
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// Referring Physician's Address (0008,0092) ST
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_ADDRESS: Tag = Tag(0x0008, 0x0092);
/// Referring Physician's Telephone Numbers (0008,0094) SH
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_TELEPHONE_NUMBERS: Tag = Tag(0x0008, 0x0094);
/// Code Value (0008,0100) SH
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// Coding Scheme Designator (0008,0102) SH
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// Coding Scheme Version (0008,0103) SH
#[rustfmt::skip]
pub const CODING_SCHEME_VERSION: Tag = Tag(0x0008, 0x0103);
/// Code Meaning (0008,0104) LO
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// Timezone Offset From UTC (0008,0201) SH
#[rustfmt::skip]
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// Station Name (0008,1010) SH
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// Study Description (0008,1030) LO
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// Series Description (0008,103E) LO
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// Institutional Department Name (0008,1040) LO
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// Physician(s) of Record (0008,1048) PN
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
/// Performing Physician's Name (0008,1050) PN
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// Name of Physician(s) Reading Study (0008,1060) PN
#[rustfmt::skip]
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// Operators' Name (0008,1070) PN
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// Admitting Diagnoses Description (0008,1080) LO
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// Manufacturer's Model Name (0008,1090) LO
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// Referenced Study Sequence (0008,1110) SQ
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// Referenced Performed Procedure Step Sequence (0008,1111) SQ
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// Referenced Series Sequence (0008,1115) SQ
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// Referenced Image Sequence (0008,1140) SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// Referenced SOP Class UID (0008,1150) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// Referenced SOP Instance UID (0008,1155) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// Referenced Frame Number (0008,1160) IS
#[rustfmt::skip]
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// Derivation Description (0008,2111) ST
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// Source Image Sequence (0008,2112) SQ
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// Creator-Version UID (0008,9123) UI
#[rustfmt::skip]
pub const CREATOR_VERSION_UID: Tag = Tag(0x0008, 0x9123);
/// Pixel Presentation (0008,9205) CS
#[rustfmt::skip]
pub const PIXEL_PRESENTATION: Tag = Tag(0x0008, 0x9205);
/// Patient's Name (0010,0010) PN
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// Patient ID (0010,0020) LO
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// Issuer of Patient ID (0010,0021) LO
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// Patient's Birth Date (0010,0030) DA
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// Patient's Birth Time (0010,0032) TM
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// Patient's Sex (0010,0040) CS
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// Other Patient IDs (0010,1000) LO (Retired)
#[rustfmt::skip]
pub const OTHER_PATIENT_I_DS: Tag = Tag(0x0010, 0x1000);
/// Other Patient Names (0010,1001) PN
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// Patient's Age (0010,1010) AS
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// Patient's Size (0010,1020) DS
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// Patient's Weight (0010,1030) DS
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// Patient's Address (0010,1040) LO
#[rustfmt::skip]
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);
/// Ethnic Group (0010,2160) SH
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// Additional Patient History (0010,21B0) LT
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// Pregnancy Status (0010,21C0) US
#[rustfmt::skip]
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);
/// Patient Comments (0010,4000) LT
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// Coupling Medium (0014,4056) ST
#[rustfmt::skip]
pub const COUPLING_MEDIUM: Tag = Tag(0x0014, 0x4056);
/// Coupling Velocity (0014,4057) DS
#[rustfmt::skip]
pub const COUPLING_VELOCITY: Tag = Tag(0x0014, 0x4057);
/// Probe Center Location X (0014,4058) DS
#[rustfmt::skip]
pub const PROBE_CENTER_LOCATION_X: Tag = Tag(0x0014, 0x4058);
/// Contrast/Bolus Agent (0018,0010) LO
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// Body Part Examined (0018,0015) CS
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// Scanning Sequence (0018,0020) CS
#[rustfmt::skip]
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// Sequence Variant (0018,0021) CS
#[rustfmt::skip]
pub const SEQUENCE_VARIANT: Tag = Tag(0x0018, 0x0021);
/// Scan Options (0018,0022) CS
#[rustfmt::skip]
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// MR Acquisition Type (0018,0023) CS
#[rustfmt::skip]
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
/// Slice Thickness (0018,0050) DS
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// Repetition Time (0018,0080) DS
#[rustfmt::skip]
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// Echo Time (0018,0081) DS
#[rustfmt::skip]
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// Inversion Time (0018,0082) DS
#[rustfmt::skip]
pub const INVERSION_TIME: Tag = Tag(0x0018, 0x0082);
/// Number of Averages (0018,0083) DS
#[rustfmt::skip]
pub const NUMBER_OF_AVERAGES: Tag = Tag(0x0018, 0x0083);
/// Imaging Frequency (0018,0084) DS
#[rustfmt::skip]
pub const IMAGING_FREQUENCY: Tag = Tag(0x0018, 0x0084);
/// Magnetic Field Strength (0018,0087) DS
#[rustfmt::skip]
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// Spacing Between Slices (0018,0088) DS
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// Device Serial Number (0018,1000) LO
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// Software Versions (0018,1020) LO
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// Protocol Name (0018,1030) LO
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// Exposure Time (0018,1150) IS
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// X-Ray Tube Current (0018,1151) IS
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure (0018,1152) IS
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// Flip Angle (0018,1314) DS
#[rustfmt::skip]
pub const FLIP_ANGLE: Tag = Tag(0x0018, 0x1314);
/// Patient Position (0018,5100) CS
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// Secondary Positioner Scan Start Angle (0018,9511) FL
#[rustfmt::skip]
pub const SECONDARY_POSITIONER_SCAN_START_ANGLE: Tag = Tag(0x0018, 0x9511);
/// Study Instance UID (0020,000D) UI
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// Series Instance UID (0020,000E) UI
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// Study ID (0020,0010) SH
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// Series Number (0020,0011) IS
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// Acquisition Number (0020,0012) IS
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// Instance Number (0020,0013) IS
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// Patient Orientation (0020,0020) CS
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// Image Position (0020,0030) DS (Retired)
#[rustfmt::skip]
pub const IMAGE_POSITION: Tag = Tag(0x0020, 0x0030);
/// Image Position (Patient) (0020,0032) DS
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// Image Orientation (0020,0035) DS (Retired)
#[rustfmt::skip]
pub const IMAGE_ORIENTATION: Tag = Tag(0x0020, 0x0035);
/// Image Orientation (Patient) (0020,0037) DS
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// Frame of Reference UID (0020,0052) UI
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality (0020,0060) CS
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// Position Reference Indicator (0020,1040) LO
#[rustfmt::skip]
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// Slice Location (0020,1041) DS
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// Source Image IDs (0020,31xx) CS (Retired)
#[rustfmt::skip]
pub const SOURCE_IMAGE_I_DS: Tag = Tag(0x0020, 0x3100);
/// Image Comments (0020,4000) LT
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// Samples per Pixel (0028,0002) US
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// Photometric Interpretation (0028,0004) CS
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// Planar Configuration (0028,0006) US
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// Number of Frames (0028,0008) IS
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows (0028,0010) US
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Pixel Spacing (0028,0030) DS
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// Pixel Aspect Ratio (0028,0034) IS
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// Bits Allocated (0028,0100) US
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// Bits Stored (0028,0101) US
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// High Bit (0028,0102) US
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// Pixel Representation (0028,0103) US
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// Smallest Image Pixel Value (0028,0106) US or SS
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// Largest Image Pixel Value (0028,0107) US or SS
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// Pixel Padding Value (0028,0120) US or SS
#[rustfmt::skip]
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// Rows For Nth Order Coefficients (0028,04x0) US (Retired)
#[rustfmt::skip]
pub const ROWS_FOR_NTH_ORDER_COEFFICIENTS: Tag = Tag(0x0028, 0x0400);
/// Columns For Nth Order Coefficients (0028,04x1) US (Retired)
#[rustfmt::skip]
pub const COLUMNS_FOR_NTH_ORDER_COEFFICIENTS: Tag = Tag(0x0028, 0x0401);
/// Coefficient Coding (0028,04x2) LO (Retired)
#[rustfmt::skip]
pub const COEFFICIENT_CODING: Tag = Tag(0x0028, 0x0402);
/// Coefficient Coding Pointers (0028,04x3) AT (Retired)
#[rustfmt::skip]
pub const COEFFICIENT_CODING_POINTERS: Tag = Tag(0x0028, 0x0403);
/// Code Label (0028,08x0) CS (Retired)
#[rustfmt::skip]
pub const CODE_LABEL: Tag = Tag(0x0028, 0x0800);
/// Number of Tables (0028,08x2) US (Retired)
#[rustfmt::skip]
pub const NUMBER_OF_TABLES: Tag = Tag(0x0028, 0x0802);
/// Code Table Location (0028,08x3) AT (Retired)
#[rustfmt::skip]
pub const CODE_TABLE_LOCATION: Tag = Tag(0x0028, 0x0803);
/// Bits For Code Word (0028,08x4) US (Retired)
#[rustfmt::skip]
pub const BITS_FOR_CODE_WORD: Tag = Tag(0x0028, 0x0804);
/// Image Data Location (0028,08x8) AT (Retired)
#[rustfmt::skip]
pub const IMAGE_DATA_LOCATION: Tag = Tag(0x0028, 0x0808);
/// Window Center (0028,1050) DS
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// Window Width (0028,1051) DS
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// Rescale Intercept (0028,1052) DS
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// Rescale Slope (0028,1053) DS
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// Rescale Type (0028,1054) LO
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// Red Palette Color Lookup Table Descriptor (0028,1101) US or SS
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// Red Palette Color Lookup Table Data (0028,1201) OW
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// Lossy Image Compression (0028,2110) CS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// Lossy Image Compression Ratio (0028,2112) DS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// LUT Descriptor (0028,3002) US or SS
#[rustfmt::skip]
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUT Data (0028,3006) US or OW
#[rustfmt::skip]
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// VOI LUT Sequence (0028,3010) SQ
#[rustfmt::skip]
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// Requested Procedure Description (0032,1060) LO
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// Performed Procedure Step Start Date (0040,0244) DA
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// Performed Procedure Step ID (0040,0253) SH
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// Content Sequence (0040,A730) SQ
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// Phase Description (0054,0039) CS
#[rustfmt::skip]
pub const PHASE_DESCRIPTION: Tag = Tag(0x0054, 0x0039);
/// Number of Slices (0054,0081) US
#[rustfmt::skip]
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
/// Escape Triplet (1000,xxx0) US (Retired)
#[rustfmt::skip]
pub const ESCAPE_TRIPLET: Tag = Tag(0x1000, 0x0000);
/// Run Length Triplet (1000,xxx1) US (Retired)
#[rustfmt::skip]
pub const RUN_LENGTH_TRIPLET: Tag = Tag(0x1000, 0x0001);
/// Huffman Table Size (1000,xxx2) US (Retired)
#[rustfmt::skip]
pub const HUFFMAN_TABLE_SIZE: Tag = Tag(0x1000, 0x0002);
/// Huffman Table Triplet (1000,xxx3) US (Retired)
#[rustfmt::skip]
pub const HUFFMAN_TABLE_TRIPLET: Tag = Tag(0x1000, 0x0003);
/// Shift Table Size (1000,xxx4) US (Retired)
#[rustfmt::skip]
pub const SHIFT_TABLE_SIZE: Tag = Tag(0x1000, 0x0004);
/// Shift Table Triplet (1000,xxx5) US (Retired)
#[rustfmt::skip]
pub const SHIFT_TABLE_TRIPLET: Tag = Tag(0x1000, 0x0005);
/// Zonal Map (1010,xxxx) US (Retired)
#[rustfmt::skip]
pub const ZONAL_MAP: Tag = Tag(0x1010, 0x0000);
/// Radiation Machine SAD (3002,0022) DS
#[rustfmt::skip]
pub const RADIATION_MACHINE_SAD: Tag = Tag(0x3002, 0x0022);
/// Structure Set ROI Sequence (3006,0020) SQ
#[rustfmt::skip]
pub const STRUCTURE_SET_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0020);
/// Beam Sequence (300A,00B0) SQ
#[rustfmt::skip]
pub const BEAM_SEQUENCE: Tag = Tag(0x300A, 0x00B0);
/// Curve Dimensions (50xx,0005) US (Retired)
#[rustfmt::skip]
pub const CURVE_DIMENSIONS: Tag = Tag(0x5000, 0x0005);
/// Number of Points (50xx,0010) US (Retired)
#[rustfmt::skip]
pub const NUMBER_OF_POINTS: Tag = Tag(0x5000, 0x0010);
/// Type of Data (50xx,0020) CS (Retired)
#[rustfmt::skip]
pub const TYPE_OF_DATA: Tag = Tag(0x5000, 0x0020);
/// Curve Description (50xx,0022) LO (Retired)
#[rustfmt::skip]
pub const CURVE_DESCRIPTION: Tag = Tag(0x5000, 0x0022);
/// Axis Units (50xx,0030) SH (Retired)
#[rustfmt::skip]
pub const AXIS_UNITS: Tag = Tag(0x5000, 0x0030);
/// Data Value Representation (50xx,0103) US (Retired)
#[rustfmt::skip]
pub const DATA_VALUE_REPRESENTATION: Tag = Tag(0x5000, 0x0103);
/// Curve Referenced Overlay Sequence (50xx,2600) SQ (Retired)
#[rustfmt::skip]
pub const CURVE_REFERENCED_OVERLAY_SEQUENCE: Tag = Tag(0x5000, 0x2600);
/// Curve Data (50xx,3000) OB or OW (Retired)
#[rustfmt::skip]
pub const CURVE_DATA: Tag = Tag(0x5000, 0x3000);
/// Overlay Rows (60xx,0010) US
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// Overlay Columns (60xx,0011) US
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// Number of Frames in Overlay (60xx,0015) IS
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES_IN_OVERLAY: Tag = Tag(0x6000, 0x0015);
/// Overlay Description (60xx,0022) LO
#[rustfmt::skip]
pub const OVERLAY_DESCRIPTION: Tag = Tag(0x6000, 0x0022);
/// Overlay Type (60xx,0040) CS
#[rustfmt::skip]
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// Overlay Origin (60xx,0050) SS
#[rustfmt::skip]
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// Overlay Bits Allocated (60xx,0100) US
#[rustfmt::skip]
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// Overlay Bit Position (60xx,0102) US
#[rustfmt::skip]
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// Overlay Format (60xx,0110) CS (Retired)
#[rustfmt::skip]
pub const OVERLAY_FORMAT: Tag = Tag(0x6000, 0x0110);
/// Overlay Location (60xx,0200) US (Retired)
#[rustfmt::skip]
pub const OVERLAY_LOCATION: Tag = Tag(0x6000, 0x0200);
/// Overlay Data (60xx,3000) OB or OW
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// Extended Offset Table (7FE0,0001) OV
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);
/// Extended Offset Table Lengths (7FE0,0002) OV
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);
/// Float Pixel Data (7FE0,0008) OF
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// Double Float Pixel Data (7FE0,0009) OD
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// Pixel Data (7FE0,0010) OB or OW
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// Coefficients SDVN (7FE0,0020) OW (Retired)
#[rustfmt::skip]
pub const COEFFICIENTS_SDVN: Tag = Tag(0x7FE0, 0x0020);
/// Coefficients SDHN (7FE0,0030) OW (Retired)
#[rustfmt::skip]
pub const COEFFICIENTS_SDHN: Tag = Tag(0x7FE0, 0x0030);
/// Coefficients SDDN (7FE0,0040) OW (Retired)
#[rustfmt::skip]
pub const COEFFICIENTS_SDDN: Tag = Tag(0x7FE0, 0x0040);
/// Variable Pixel Data (7Fxx,0010) OB or OW (Retired)
#[rustfmt::skip]
pub const VARIABLE_PIXEL_DATA: Tag = Tag(0x7F00, 0x0010);
/// Variable Next Data Group (7Fxx,0011) US (Retired)
#[rustfmt::skip]
pub const VARIABLE_NEXT_DATA_GROUP: Tag = Tag(0x7F00, 0x0011);
/// Variable Coefficients SDVN (7Fxx,0020) OW (Retired)
#[rustfmt::skip]
pub const VARIABLE_COEFFICIENTS_SDVN: Tag = Tag(0x7F00, 0x0020);
/// Variable Coefficients SDHN (7Fxx,0030) OW (Retired)
#[rustfmt::skip]
pub const VARIABLE_COEFFICIENTS_SDHN: Tag = Tag(0x7F00, 0x0030);
/// Variable Coefficients SDDN (7Fxx,0040) OW (Retired)
#[rustfmt::skip]
pub const VARIABLE_COEFFICIENTS_SDDN: Tag = Tag(0x7F00, 0x0040);
/// Digital Signatures Sequence (FFFA,FFFA) SQ
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// Data Set Trailing Padding (FFFC,FFFC) OB
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);
/// Item (FFFE,E000) undefined
#[rustfmt::skip]
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// Item Delimitation Item (FFFE,E00D) undefined
#[rustfmt::skip]
pub const ITEM_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE00D);
/// Sequence Delimitation Item (FFFE,E0DD) undefined
#[rustfmt::skip]
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE0DD);

/// The standard data element entries, in declaration order.
#[rustfmt::skip]
pub const ENTRIES: &[E] = &[
    E::new(TagPattern::single(COMMAND_GROUP_LENGTH), "CommandGroupLength", "Command Group Length", Exact(UL), false),
    E::new(TagPattern::single(COMMAND_LENGTH_TO_END), "CommandLengthToEnd", "Command Length to End", Exact(UL), true),
    E::new(TagPattern::single(AFFECTED_SOP_CLASS_UID), "AffectedSOPClassUID", "Affected SOP Class UID", Exact(UI), false),
    E::new(TagPattern::single(REQUESTED_SOP_CLASS_UID), "RequestedSOPClassUID", "Requested SOP Class UID", Exact(UI), false),
    E::new(TagPattern::single(COMMAND_RECOGNITION_CODE), "CommandRecognitionCode", "Command Recognition Code", Exact(SH), true),
    E::new(TagPattern::single(COMMAND_FIELD), "CommandField", "Command Field", Exact(US), false),
    E::new(TagPattern::single(MESSAGE_ID), "MessageID", "Message ID", Exact(US), false),
    E::new(TagPattern::single(MESSAGE_ID_BEING_RESPONDED_TO), "MessageIDBeingRespondedTo", "Message ID Being Responded To", Exact(US), false),
    E::new(TagPattern::single(INITIATOR), "Initiator", "Initiator", Exact(AE), true),
    E::new(TagPattern::single(RECEIVER), "Receiver", "Receiver", Exact(AE), true),
    E::new(TagPattern::single(FIND_LOCATION), "FindLocation", "Find Location", Exact(AE), true),
    E::new(TagPattern::single(MOVE_DESTINATION), "MoveDestination", "Move Destination", Exact(AE), false),
    E::new(TagPattern::single(PRIORITY), "Priority", "Priority", Exact(US), false),
    E::new(TagPattern::single(COMMAND_DATA_SET_TYPE), "CommandDataSetType", "Command Data Set Type", Exact(US), false),
    E::new(TagPattern::single(NUMBER_OF_MATCHES), "NumberOfMatches", "Number of Matches", Exact(US), true),
    E::new(TagPattern::single(RESPONSE_SEQUENCE_NUMBER), "ResponseSequenceNumber", "Response Sequence Number", Exact(US), true),
    E::new(TagPattern::single(STATUS), "Status", "Status", Exact(US), false),
    E::new(TagPattern::single(OFFENDING_ELEMENT), "OffendingElement", "Offending Element", Exact(AT), false),
    E::new(TagPattern::single(ERROR_COMMENT), "ErrorComment", "Error Comment", Exact(LO), false),
    E::new(TagPattern::single(ERROR_ID), "ErrorID", "Error ID", Exact(US), false),
    E::new(TagPattern::single(AFFECTED_SOP_INSTANCE_UID), "AffectedSOPInstanceUID", "Affected SOP Instance UID", Exact(UI), false),
    E::new(TagPattern::single(REQUESTED_SOP_INSTANCE_UID), "RequestedSOPInstanceUID", "Requested SOP Instance UID", Exact(UI), false),
    E::new(TagPattern::single(EVENT_TYPE_ID), "EventTypeID", "Event Type ID", Exact(US), false),
    E::new(TagPattern::single(ATTRIBUTE_IDENTIFIER_LIST), "AttributeIdentifierList", "Attribute Identifier List", Exact(AT), false),
    E::new(TagPattern::single(ACTION_TYPE_ID), "ActionTypeID", "Action Type ID", Exact(US), false),
    E::new(TagPattern::single(NUMBER_OF_REMAINING_SUBOPERATIONS), "NumberOfRemainingSuboperations", "Number of Remaining Sub-operations", Exact(US), false),
    E::new(TagPattern::single(NUMBER_OF_COMPLETED_SUBOPERATIONS), "NumberOfCompletedSuboperations", "Number of Completed Sub-operations", Exact(US), false),
    E::new(TagPattern::single(NUMBER_OF_FAILED_SUBOPERATIONS), "NumberOfFailedSuboperations", "Number of Failed Sub-operations", Exact(US), false),
    E::new(TagPattern::single(NUMBER_OF_WARNING_SUBOPERATIONS), "NumberOfWarningSuboperations", "Number of Warning Sub-operations", Exact(US), false),
    E::new(TagPattern::single(MOVE_ORIGINATOR_APPLICATION_ENTITY_TITLE), "MoveOriginatorApplicationEntityTitle", "Move Originator Application Entity Title", Exact(AE), false),
    E::new(TagPattern::single(MOVE_ORIGINATOR_MESSAGE_ID), "MoveOriginatorMessageID", "Move Originator Message ID", Exact(US), false),
    E::new(TagPattern::single(DIALOG_RECEIVER), "DialogReceiver", "Dialog Receiver", Exact(LT), true),
    E::new(TagPattern::single(TERMINAL_TYPE), "TerminalType", "Terminal Type", Exact(LT), true),
    E::new(TagPattern::single(MESSAGE_SET_ID), "MessageSetID", "Message Set ID", Exact(SH), true),
    E::new(TagPattern::single(END_MESSAGE_ID), "EndMessageID", "End Message ID", Exact(SH), true),
    E::new(TagPattern::single(DISPLAY_FORMAT), "DisplayFormat", "Display Format", Exact(LT), true),
    E::new(TagPattern::single(PAGE_POSITION_ID), "PagePositionID", "Page Position ID", Exact(LT), true),
    E::new(TagPattern::single(TEXT_FORMAT_ID), "TextFormatID", "Text Format ID", Exact(CS), true),
    E::new(TagPattern::single(NORMAL_REVERSE), "NormalReverse", "Normal/Reverse", Exact(CS), true),
    E::new(TagPattern::single(ADD_GRAY_SCALE), "AddGrayScale", "Add Gray Scale", Exact(CS), true),
    E::new(TagPattern::single(BORDERS), "Borders", "Borders", Exact(CS), true),
    E::new(TagPattern::single(COPIES), "Copies", "Copies", Exact(IS), true),
    E::new(TagPattern::single(COMMAND_MAGNIFICATION_TYPE), "CommandMagnificationType", "Command Magnification Type", Exact(CS), true),
    E::new(TagPattern::single(ERASE), "Erase", "Erase", Exact(CS), true),
    E::new(TagPattern::single(PRINT), "Print", "Print", Exact(CS), true),
    E::new(TagPattern::single(OVERLAYS), "Overlays", "Overlays", Exact(US), true),
    E::new(TagPattern::single(FILE_META_INFORMATION_GROUP_LENGTH), "FileMetaInformationGroupLength", "File Meta Information Group Length", Exact(UL), false),
    E::new(TagPattern::single(FILE_META_INFORMATION_VERSION), "FileMetaInformationVersion", "File Meta Information Version", Exact(OB), false),
    E::new(TagPattern::single(MEDIA_STORAGE_SOP_CLASS_UID), "MediaStorageSOPClassUID", "Media Storage SOP Class UID", Exact(UI), false),
    E::new(TagPattern::single(MEDIA_STORAGE_SOP_INSTANCE_UID), "MediaStorageSOPInstanceUID", "Media Storage SOP Instance UID", Exact(UI), false),
    E::new(TagPattern::single(TRANSFER_SYNTAX_UID), "TransferSyntaxUID", "Transfer Syntax UID", Exact(UI), false),
    E::new(TagPattern::single(IMPLEMENTATION_CLASS_UID), "ImplementationClassUID", "Implementation Class UID", Exact(UI), false),
    E::new(TagPattern::single(IMPLEMENTATION_VERSION_NAME), "ImplementationVersionName", "Implementation Version Name", Exact(SH), false),
    E::new(TagPattern::single(SOURCE_APPLICATION_ENTITY_TITLE), "SourceApplicationEntityTitle", "Source Application Entity Title", Exact(AE), false),
    E::new(TagPattern::single(SENDING_APPLICATION_ENTITY_TITLE), "SendingApplicationEntityTitle", "Sending Application Entity Title", Exact(AE), false),
    E::new(TagPattern::single(RECEIVING_APPLICATION_ENTITY_TITLE), "ReceivingApplicationEntityTitle", "Receiving Application Entity Title", Exact(AE), false),
    E::new(TagPattern::single(SOURCE_PRESENTATION_ADDRESS), "SourcePresentationAddress", "Source Presentation Address", Exact(UR), false),
    E::new(TagPattern::single(SENDING_PRESENTATION_ADDRESS), "SendingPresentationAddress", "Sending Presentation Address", Exact(UR), false),
    E::new(TagPattern::single(RECEIVING_PRESENTATION_ADDRESS), "ReceivingPresentationAddress", "Receiving Presentation Address", Exact(UR), false),
    E::new(TagPattern::single(RTV_META_INFORMATION_VERSION), "RTVMetaInformationVersion", "RTV Meta Information Version", Exact(OB), false),
    E::new(TagPattern::single(RTV_COMMUNICATION_SOP_CLASS_UID), "RTVCommunicationSOPClassUID", "RTV Communication SOP Class UID", Exact(UI), false),
    E::new(TagPattern::single(RTV_COMMUNICATION_SOP_INSTANCE_UID), "RTVCommunicationSOPInstanceUID", "RTV Communication SOP Instance UID", Exact(UI), false),
    E::new(TagPattern::single(RTV_SOURCE_IDENTIFIER), "RTVSourceIdentifier", "RTV Source Identifier", Exact(OB), false),
    E::new(TagPattern::single(RTV_FLOW_IDENTIFIER), "RTVFlowIdentifier", "RTV Flow Identifier", Exact(OB), false),
    E::new(TagPattern::single(RTV_FLOW_RTP_SAMPLING_RATE), "RTVFlowRTPSamplingRate", "RTV Flow RTP Sampling Rate", Exact(UL), false),
    E::new(TagPattern::single(RTV_FLOW_ACTUAL_FRAME_DURATION), "RTVFlowActualFrameDuration", "RTV Flow Actual Frame Duration", Exact(FD), false),
    E::new(TagPattern::single(PRIVATE_INFORMATION_CREATOR_UID), "PrivateInformationCreatorUID", "Private Information Creator UID", Exact(UI), false),
    E::new(TagPattern::single(PRIVATE_INFORMATION), "PrivateInformation", "Private Information", Exact(OB), false),
    E::new(TagPattern::single(FILE_SET_ID), "FileSetID", "File-set ID", Exact(CS), false),
    E::new(TagPattern::single(FILE_SET_DESCRIPTOR_FILE_ID), "FileSetDescriptorFileID", "File-set Descriptor File ID", Exact(CS), false),
    E::new(TagPattern::single(SPECIFIC_CHARACTER_SET_OF_FILE_SET_DESCRIPTOR_FILE), "SpecificCharacterSetOfFileSetDescriptorFile", "Specific Character Set of File-set Descriptor File", Exact(CS), false),
    E::new(TagPattern::single(OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY), "OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity", "Offset of the First Directory Record of the Root Directory Entity", Exact(UL), false),
    E::new(TagPattern::single(OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY), "OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity", "Offset of the Last Directory Record of the Root Directory Entity", Exact(UL), false),
    E::new(TagPattern::single(FILE_SET_CONSISTENCY_FLAG), "FileSetConsistencyFlag", "File-set Consistency Flag", Exact(US), false),
    E::new(TagPattern::single(DIRECTORY_RECORD_SEQUENCE), "DirectoryRecordSequence", "Directory Record Sequence", Exact(SQ), false),
    E::new(TagPattern::single(OFFSET_OF_THE_NEXT_DIRECTORY_RECORD), "OffsetOfTheNextDirectoryRecord", "Offset of the Next Directory Record", Exact(UL), false),
    E::new(TagPattern::single(RECORD_IN_USE_FLAG), "RecordInUseFlag", "Record In-use Flag", Exact(US), false),
    E::new(TagPattern::single(OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY), "OffsetOfReferencedLowerLevelDirectoryEntity", "Offset of Referenced Lower-Level Directory Entity", Exact(UL), false),
    E::new(TagPattern::single(DIRECTORY_RECORD_TYPE), "DirectoryRecordType", "Directory Record Type", Exact(CS), false),
    E::new(TagPattern::single(PRIVATE_RECORD_UID), "PrivateRecordUID", "Private Record UID", Exact(UI), false),
    E::new(TagPattern::single(REFERENCED_FILE_ID), "ReferencedFileID", "Referenced File ID", Exact(CS), false),
    E::new(TagPattern::single(MRDR_DIRECTORY_RECORD_OFFSET), "MRDRDirectoryRecordOffset", "MRDR Directory Record Offset", Exact(UL), true),
    E::new(TagPattern::single(REFERENCED_SOP_CLASS_UID_IN_FILE), "ReferencedSOPClassUIDInFile", "Referenced SOP Class UID in File", Exact(UI), false),
    E::new(TagPattern::single(REFERENCED_SOP_INSTANCE_UID_IN_FILE), "ReferencedSOPInstanceUIDInFile", "Referenced SOP Instance UID in File", Exact(UI), false),
    E::new(TagPattern::single(REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE), "ReferencedTransferSyntaxUIDInFile", "Referenced Transfer Syntax UID in File", Exact(UI), false),
    E::new(TagPattern::single(REFERENCED_RELATED_GENERAL_SOP_CLASS_UID_IN_FILE), "ReferencedRelatedGeneralSOPClassUIDInFile", "Referenced Related General SOP Class UID in File", Exact(UI), false),
    E::new(TagPattern::single(NUMBER_OF_REFERENCES), "NumberOfReferences", "Number of References", Exact(UL), true),
    E::new(TagPattern::single(LENGTH_TO_END), "LengthToEnd", "Length to End", Exact(UL), true),
    E::new(TagPattern::single(SPECIFIC_CHARACTER_SET), "SpecificCharacterSet", "Specific Character Set", Exact(CS), false),
    E::new(TagPattern::single(LANGUAGE_CODE_SEQUENCE), "LanguageCodeSequence", "Language Code Sequence", Exact(SQ), false),
    E::new(TagPattern::single(IMAGE_TYPE), "ImageType", "Image Type", Exact(CS), false),
    E::new(TagPattern::single(RECOGNITION_CODE), "RecognitionCode", "Recognition Code", Exact(SH), true),
    E::new(TagPattern::single(INSTANCE_CREATION_DATE), "InstanceCreationDate", "Instance Creation Date", Exact(DA), false),
    E::new(TagPattern::single(INSTANCE_CREATION_TIME), "InstanceCreationTime", "Instance Creation Time", Exact(TM), false),
    E::new(TagPattern::single(INSTANCE_CREATOR_UID), "InstanceCreatorUID", "Instance Creator UID", Exact(UI), false),
    E::new(TagPattern::single(INSTANCE_COERCION_DATE_TIME), "InstanceCoercionDateTime", "Instance Coercion DateTime", Exact(DT), false),
    E::new(TagPattern::single(SOP_CLASS_UID), "SOPClassUID", "SOP Class UID", Exact(UI), false),
    E::new(TagPattern::single(SOP_INSTANCE_UID), "SOPInstanceUID", "SOP Instance UID", Exact(UI), false),
    E::new(TagPattern::single(RELATED_GENERAL_SOP_CLASS_UID), "RelatedGeneralSOPClassUID", "Related General SOP Class UID", Exact(UI), false),
    E::new(TagPattern::single(ORIGINAL_SPECIALIZED_SOP_CLASS_UID), "OriginalSpecializedSOPClassUID", "Original Specialized SOP Class UID", Exact(UI), false),
    E::new(TagPattern::single(STUDY_DATE), "StudyDate", "Study Date", Exact(DA), false),
    E::new(TagPattern::single(SERIES_DATE), "SeriesDate", "Series Date", Exact(DA), false),
    E::new(TagPattern::single(ACQUISITION_DATE), "AcquisitionDate", "Acquisition Date", Exact(DA), false),
    E::new(TagPattern::single(CONTENT_DATE), "ContentDate", "Content Date", Exact(DA), false),
    E::new(TagPattern::single(OVERLAY_DATE), "OverlayDate", "Overlay Date", Exact(DA), true),
    E::new(TagPattern::single(CURVE_DATE), "CurveDate", "Curve Date", Exact(DA), true),
    E::new(TagPattern::single(ACQUISITION_DATE_TIME), "AcquisitionDateTime", "Acquisition DateTime", Exact(DT), false),
    E::new(TagPattern::single(STUDY_TIME), "StudyTime", "Study Time", Exact(TM), false),
    E::new(TagPattern::single(SERIES_TIME), "SeriesTime", "Series Time", Exact(TM), false),
    E::new(TagPattern::single(ACQUISITION_TIME), "AcquisitionTime", "Acquisition Time", Exact(TM), false),
    E::new(TagPattern::single(CONTENT_TIME), "ContentTime", "Content Time", Exact(TM), false),
    E::new(TagPattern::single(OVERLAY_TIME), "OverlayTime", "Overlay Time", Exact(TM), true),
    E::new(TagPattern::single(CURVE_TIME), "CurveTime", "Curve Time", Exact(TM), true),
    E::new(TagPattern::single(DATA_SET_TYPE), "DataSetType", "Data Set Type", Exact(US), true),
    E::new(TagPattern::single(DATA_SET_SUBTYPE), "DataSetSubtype", "Data Set Subtype", Exact(LO), true),
    E::new(TagPattern::single(NUCLEAR_MEDICINE_SERIES_TYPE), "NuclearMedicineSeriesType", "Nuclear Medicine Series Type", Exact(CS), true),
    E::new(TagPattern::single(ACCESSION_NUMBER), "AccessionNumber", "Accession Number", Exact(SH), false),
    E::new(TagPattern::single(QUERY_RETRIEVE_LEVEL), "QueryRetrieveLevel", "Query/Retrieve Level", Exact(CS), false),
    E::new(TagPattern::single(RETRIEVE_AE_TITLE), "RetrieveAETitle", "Retrieve AE Title", Exact(AE), false),
    E::new(TagPattern::single(INSTANCE_AVAILABILITY), "InstanceAvailability", "Instance Availability", Exact(CS), false),
    E::new(TagPattern::single(FAILED_SOP_INSTANCE_UID_LIST), "FailedSOPInstanceUIDList", "Failed SOP Instance UID List", Exact(UI), false),
    E::new(TagPattern::single(MODALITY), "Modality", "Modality", Exact(CS), false),
    E::new(TagPattern::single(MODALITIES_IN_STUDY), "ModalitiesInStudy", "Modalities in Study", Exact(CS), false),
    E::new(TagPattern::single(SOP_CLASSES_IN_STUDY), "SOPClassesInStudy", "SOP Classes in Study", Exact(UI), false),
    E::new(TagPattern::single(CONVERSION_TYPE), "ConversionType", "Conversion Type", Exact(CS), false),
    E::new(TagPattern::single(PRESENTATION_INTENT_TYPE), "PresentationIntentType", "Presentation Intent Type", Exact(CS), false),
    E::new(TagPattern::single(MANUFACTURER), "Manufacturer", "Manufacturer", Exact(LO), false),
    E::new(TagPattern::single(INSTITUTION_NAME), "InstitutionName", "Institution Name", Exact(LO), false),
    E::new(TagPattern::single(INSTITUTION_ADDRESS), "InstitutionAddress", "Institution Address", Exact(ST), false),
    E::new(TagPattern::single(INSTITUTION_CODE_SEQUENCE), "InstitutionCodeSequence", "Institution Code Sequence", Exact(SQ), false),
    E::new(TagPattern::single(REFERRING_PHYSICIAN_NAME), "ReferringPhysicianName", "Referring Physician's Name", Exact(PN), false),
    E::new(TagPattern::single(REFERRING_PHYSICIAN_ADDRESS), "ReferringPhysicianAddress", "Referring Physician's Address", Exact(ST), false),
    E::new(TagPattern::single(REFERRING_PHYSICIAN_TELEPHONE_NUMBERS), "ReferringPhysicianTelephoneNumbers", "Referring Physician's Telephone Numbers", Exact(SH), false),
    E::new(TagPattern::single(CODE_VALUE), "CodeValue", "Code Value", Exact(SH), false),
    E::new(TagPattern::single(CODING_SCHEME_DESIGNATOR), "CodingSchemeDesignator", "Coding Scheme Designator", Exact(SH), false),
    E::new(TagPattern::single(CODING_SCHEME_VERSION), "CodingSchemeVersion", "Coding Scheme Version", Exact(SH), false),
    E::new(TagPattern::single(CODE_MEANING), "CodeMeaning", "Code Meaning", Exact(LO), false),
    E::new(TagPattern::single(TIMEZONE_OFFSET_FROM_UTC), "TimezoneOffsetFromUTC", "Timezone Offset From UTC", Exact(SH), false),
    E::new(TagPattern::single(STATION_NAME), "StationName", "Station Name", Exact(SH), false),
    E::new(TagPattern::single(STUDY_DESCRIPTION), "StudyDescription", "Study Description", Exact(LO), false),
    E::new(TagPattern::single(SERIES_DESCRIPTION), "SeriesDescription", "Series Description", Exact(LO), false),
    E::new(TagPattern::single(INSTITUTIONAL_DEPARTMENT_NAME), "InstitutionalDepartmentName", "Institutional Department Name", Exact(LO), false),
    E::new(TagPattern::single(PHYSICIANS_OF_RECORD), "PhysiciansOfRecord", "Physician(s) of Record", Exact(PN), false),
    E::new(TagPattern::single(PERFORMING_PHYSICIAN_NAME), "PerformingPhysicianName", "Performing Physician's Name", Exact(PN), false),
    E::new(TagPattern::single(NAME_OF_PHYSICIANS_READING_STUDY), "NameOfPhysiciansReadingStudy", "Name of Physician(s) Reading Study", Exact(PN), false),
    E::new(TagPattern::single(OPERATORS_NAME), "OperatorsName", "Operators' Name", Exact(PN), false),
    E::new(TagPattern::single(ADMITTING_DIAGNOSES_DESCRIPTION), "AdmittingDiagnosesDescription", "Admitting Diagnoses Description", Exact(LO), false),
    E::new(TagPattern::single(MANUFACTURER_MODEL_NAME), "ManufacturerModelName", "Manufacturer's Model Name", Exact(LO), false),
    E::new(TagPattern::single(REFERENCED_STUDY_SEQUENCE), "ReferencedStudySequence", "Referenced Study Sequence", Exact(SQ), false),
    E::new(TagPattern::single(REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE), "ReferencedPerformedProcedureStepSequence", "Referenced Performed Procedure Step Sequence", Exact(SQ), false),
    E::new(TagPattern::single(REFERENCED_SERIES_SEQUENCE), "ReferencedSeriesSequence", "Referenced Series Sequence", Exact(SQ), false),
    E::new(TagPattern::single(REFERENCED_IMAGE_SEQUENCE), "ReferencedImageSequence", "Referenced Image Sequence", Exact(SQ), false),
    E::new(TagPattern::single(REFERENCED_SOP_CLASS_UID), "ReferencedSOPClassUID", "Referenced SOP Class UID", Exact(UI), false),
    E::new(TagPattern::single(REFERENCED_SOP_INSTANCE_UID), "ReferencedSOPInstanceUID", "Referenced SOP Instance UID", Exact(UI), false),
    E::new(TagPattern::single(REFERENCED_FRAME_NUMBER), "ReferencedFrameNumber", "Referenced Frame Number", Exact(IS), false),
    E::new(TagPattern::single(DERIVATION_DESCRIPTION), "DerivationDescription", "Derivation Description", Exact(ST), false),
    E::new(TagPattern::single(SOURCE_IMAGE_SEQUENCE), "SourceImageSequence", "Source Image Sequence", Exact(SQ), false),
    E::new(TagPattern::single(CREATOR_VERSION_UID), "CreatorVersionUID", "Creator-Version UID", Exact(UI), false),
    E::new(TagPattern::single(PIXEL_PRESENTATION), "PixelPresentation", "Pixel Presentation", Exact(CS), false),
    E::new(TagPattern::single(PATIENT_NAME), "PatientName", "Patient's Name", Exact(PN), false),
    E::new(TagPattern::single(PATIENT_ID), "PatientID", "Patient ID", Exact(LO), false),
    E::new(TagPattern::single(ISSUER_OF_PATIENT_ID), "IssuerOfPatientID", "Issuer of Patient ID", Exact(LO), false),
    E::new(TagPattern::single(PATIENT_BIRTH_DATE), "PatientBirthDate", "Patient's Birth Date", Exact(DA), false),
    E::new(TagPattern::single(PATIENT_BIRTH_TIME), "PatientBirthTime", "Patient's Birth Time", Exact(TM), false),
    E::new(TagPattern::single(PATIENT_SEX), "PatientSex", "Patient's Sex", Exact(CS), false),
    E::new(TagPattern::single(OTHER_PATIENT_I_DS), "OtherPatientIDs", "Other Patient IDs", Exact(LO), true),
    E::new(TagPattern::single(OTHER_PATIENT_NAMES), "OtherPatientNames", "Other Patient Names", Exact(PN), false),
    E::new(TagPattern::single(PATIENT_AGE), "PatientAge", "Patient's Age", Exact(AS), false),
    E::new(TagPattern::single(PATIENT_SIZE), "PatientSize", "Patient's Size", Exact(DS), false),
    E::new(TagPattern::single(PATIENT_WEIGHT), "PatientWeight", "Patient's Weight", Exact(DS), false),
    E::new(TagPattern::single(PATIENT_ADDRESS), "PatientAddress", "Patient's Address", Exact(LO), false),
    E::new(TagPattern::single(ETHNIC_GROUP), "EthnicGroup", "Ethnic Group", Exact(SH), false),
    E::new(TagPattern::single(ADDITIONAL_PATIENT_HISTORY), "AdditionalPatientHistory", "Additional Patient History", Exact(LT), false),
    E::new(TagPattern::single(PREGNANCY_STATUS), "PregnancyStatus", "Pregnancy Status", Exact(US), false),
    E::new(TagPattern::single(PATIENT_COMMENTS), "PatientComments", "Patient Comments", Exact(LT), false),
    E::new(TagPattern::single(COUPLING_MEDIUM), "CouplingMedium", "Coupling Medium", Exact(ST), false),
    E::new(TagPattern::single(COUPLING_VELOCITY), "CouplingVelocity", "Coupling Velocity", Exact(DS), false),
    E::new(TagPattern::single(PROBE_CENTER_LOCATION_X), "ProbeCenterLocationX", "Probe Center Location X", Exact(DS), false),
    E::new(TagPattern::single(CONTRAST_BOLUS_AGENT), "ContrastBolusAgent", "Contrast/Bolus Agent", Exact(LO), false),
    E::new(TagPattern::single(BODY_PART_EXAMINED), "BodyPartExamined", "Body Part Examined", Exact(CS), false),
    E::new(TagPattern::single(SCANNING_SEQUENCE), "ScanningSequence", "Scanning Sequence", Exact(CS), false),
    E::new(TagPattern::single(SEQUENCE_VARIANT), "SequenceVariant", "Sequence Variant", Exact(CS), false),
    E::new(TagPattern::single(SCAN_OPTIONS), "ScanOptions", "Scan Options", Exact(CS), false),
    E::new(TagPattern::single(MR_ACQUISITION_TYPE), "MRAcquisitionType", "MR Acquisition Type", Exact(CS), false),
    E::new(TagPattern::single(SLICE_THICKNESS), "SliceThickness", "Slice Thickness", Exact(DS), false),
    E::new(TagPattern::single(KVP), "KVP", "KVP", Exact(DS), false),
    E::new(TagPattern::single(REPETITION_TIME), "RepetitionTime", "Repetition Time", Exact(DS), false),
    E::new(TagPattern::single(ECHO_TIME), "EchoTime", "Echo Time", Exact(DS), false),
    E::new(TagPattern::single(INVERSION_TIME), "InversionTime", "Inversion Time", Exact(DS), false),
    E::new(TagPattern::single(NUMBER_OF_AVERAGES), "NumberOfAverages", "Number of Averages", Exact(DS), false),
    E::new(TagPattern::single(IMAGING_FREQUENCY), "ImagingFrequency", "Imaging Frequency", Exact(DS), false),
    E::new(TagPattern::single(MAGNETIC_FIELD_STRENGTH), "MagneticFieldStrength", "Magnetic Field Strength", Exact(DS), false),
    E::new(TagPattern::single(SPACING_BETWEEN_SLICES), "SpacingBetweenSlices", "Spacing Between Slices", Exact(DS), false),
    E::new(TagPattern::single(DEVICE_SERIAL_NUMBER), "DeviceSerialNumber", "Device Serial Number", Exact(LO), false),
    E::new(TagPattern::single(SOFTWARE_VERSIONS), "SoftwareVersions", "Software Versions", Exact(LO), false),
    E::new(TagPattern::single(PROTOCOL_NAME), "ProtocolName", "Protocol Name", Exact(LO), false),
    E::new(TagPattern::single(EXPOSURE_TIME), "ExposureTime", "Exposure Time", Exact(IS), false),
    E::new(TagPattern::single(X_RAY_TUBE_CURRENT), "XRayTubeCurrent", "X-Ray Tube Current", Exact(IS), false),
    E::new(TagPattern::single(EXPOSURE), "Exposure", "Exposure", Exact(IS), false),
    E::new(TagPattern::single(FLIP_ANGLE), "FlipAngle", "Flip Angle", Exact(DS), false),
    E::new(TagPattern::single(PATIENT_POSITION), "PatientPosition", "Patient Position", Exact(CS), false),
    E::new(TagPattern::single(SECONDARY_POSITIONER_SCAN_START_ANGLE), "SecondaryPositionerScanStartAngle", "Secondary Positioner Scan Start Angle", Exact(FL), false),
    E::new(TagPattern::single(STUDY_INSTANCE_UID), "StudyInstanceUID", "Study Instance UID", Exact(UI), false),
    E::new(TagPattern::single(SERIES_INSTANCE_UID), "SeriesInstanceUID", "Series Instance UID", Exact(UI), false),
    E::new(TagPattern::single(STUDY_ID), "StudyID", "Study ID", Exact(SH), false),
    E::new(TagPattern::single(SERIES_NUMBER), "SeriesNumber", "Series Number", Exact(IS), false),
    E::new(TagPattern::single(ACQUISITION_NUMBER), "AcquisitionNumber", "Acquisition Number", Exact(IS), false),
    E::new(TagPattern::single(INSTANCE_NUMBER), "InstanceNumber", "Instance Number", Exact(IS), false),
    E::new(TagPattern::single(PATIENT_ORIENTATION), "PatientOrientation", "Patient Orientation", Exact(CS), false),
    E::new(TagPattern::single(IMAGE_POSITION), "ImagePosition", "Image Position", Exact(DS), true),
    E::new(TagPattern::single(IMAGE_POSITION_PATIENT), "ImagePositionPatient", "Image Position (Patient)", Exact(DS), false),
    E::new(TagPattern::single(IMAGE_ORIENTATION), "ImageOrientation", "Image Orientation", Exact(DS), true),
    E::new(TagPattern::single(IMAGE_ORIENTATION_PATIENT), "ImageOrientationPatient", "Image Orientation (Patient)", Exact(DS), false),
    E::new(TagPattern::single(FRAME_OF_REFERENCE_UID), "FrameOfReferenceUID", "Frame of Reference UID", Exact(UI), false),
    E::new(TagPattern::single(LATERALITY), "Laterality", "Laterality", Exact(CS), false),
    E::new(TagPattern::single(POSITION_REFERENCE_INDICATOR), "PositionReferenceIndicator", "Position Reference Indicator", Exact(LO), false),
    E::new(TagPattern::single(SLICE_LOCATION), "SliceLocation", "Slice Location", Exact(DS), false),
    E::new(TagPattern::from_notation("(0020,31xx)"), "SourceImageIDs", "Source Image IDs", Exact(CS), true),
    E::new(TagPattern::single(IMAGE_COMMENTS), "ImageComments", "Image Comments", Exact(LT), false),
    E::new(TagPattern::single(SAMPLES_PER_PIXEL), "SamplesPerPixel", "Samples per Pixel", Exact(US), false),
    E::new(TagPattern::single(PHOTOMETRIC_INTERPRETATION), "PhotometricInterpretation", "Photometric Interpretation", Exact(CS), false),
    E::new(TagPattern::single(PLANAR_CONFIGURATION), "PlanarConfiguration", "Planar Configuration", Exact(US), false),
    E::new(TagPattern::single(NUMBER_OF_FRAMES), "NumberOfFrames", "Number of Frames", Exact(IS), false),
    E::new(TagPattern::single(ROWS), "Rows", "Rows", Exact(US), false),
    E::new(TagPattern::single(COLUMNS), "Columns", "Columns", Exact(US), false),
    E::new(TagPattern::single(PIXEL_SPACING), "PixelSpacing", "Pixel Spacing", Exact(DS), false),
    E::new(TagPattern::single(PIXEL_ASPECT_RATIO), "PixelAspectRatio", "Pixel Aspect Ratio", Exact(IS), false),
    E::new(TagPattern::single(BITS_ALLOCATED), "BitsAllocated", "Bits Allocated", Exact(US), false),
    E::new(TagPattern::single(BITS_STORED), "BitsStored", "Bits Stored", Exact(US), false),
    E::new(TagPattern::single(HIGH_BIT), "HighBit", "High Bit", Exact(US), false),
    E::new(TagPattern::single(PIXEL_REPRESENTATION), "PixelRepresentation", "Pixel Representation", Exact(US), false),
    E::new(TagPattern::single(SMALLEST_IMAGE_PIXEL_VALUE), "SmallestImagePixelValue", "Smallest Image Pixel Value", Xs, false),
    E::new(TagPattern::single(LARGEST_IMAGE_PIXEL_VALUE), "LargestImagePixelValue", "Largest Image Pixel Value", Xs, false),
    E::new(TagPattern::single(PIXEL_PADDING_VALUE), "PixelPaddingValue", "Pixel Padding Value", Xs, false),
    E::new(TagPattern::from_notation("(0028,04x0)"), "RowsForNthOrderCoefficients", "Rows For Nth Order Coefficients", Exact(US), true),
    E::new(TagPattern::from_notation("(0028,04x1)"), "ColumnsForNthOrderCoefficients", "Columns For Nth Order Coefficients", Exact(US), true),
    E::new(TagPattern::from_notation("(0028,04x2)"), "CoefficientCoding", "Coefficient Coding", Exact(LO), true),
    E::new(TagPattern::from_notation("(0028,04x3)"), "CoefficientCodingPointers", "Coefficient Coding Pointers", Exact(AT), true),
    E::new(TagPattern::from_notation("(0028,08x0)"), "CodeLabel", "Code Label", Exact(CS), true),
    E::new(TagPattern::from_notation("(0028,08x2)"), "NumberOfTables", "Number of Tables", Exact(US), true),
    E::new(TagPattern::from_notation("(0028,08x3)"), "CodeTableLocation", "Code Table Location", Exact(AT), true),
    E::new(TagPattern::from_notation("(0028,08x4)"), "BitsForCodeWord", "Bits For Code Word", Exact(US), true),
    E::new(TagPattern::from_notation("(0028,08x8)"), "ImageDataLocation", "Image Data Location", Exact(AT), true),
    E::new(TagPattern::single(WINDOW_CENTER), "WindowCenter", "Window Center", Exact(DS), false),
    E::new(TagPattern::single(WINDOW_WIDTH), "WindowWidth", "Window Width", Exact(DS), false),
    E::new(TagPattern::single(RESCALE_INTERCEPT), "RescaleIntercept", "Rescale Intercept", Exact(DS), false),
    E::new(TagPattern::single(RESCALE_SLOPE), "RescaleSlope", "Rescale Slope", Exact(DS), false),
    E::new(TagPattern::single(RESCALE_TYPE), "RescaleType", "Rescale Type", Exact(LO), false),
    E::new(TagPattern::single(RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), "RedPaletteColorLookupTableDescriptor", "Red Palette Color Lookup Table Descriptor", Xs, false),
    E::new(TagPattern::single(RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), "RedPaletteColorLookupTableData", "Red Palette Color Lookup Table Data", Exact(OW), false),
    E::new(TagPattern::single(LOSSY_IMAGE_COMPRESSION), "LossyImageCompression", "Lossy Image Compression", Exact(CS), false),
    E::new(TagPattern::single(LOSSY_IMAGE_COMPRESSION_RATIO), "LossyImageCompressionRatio", "Lossy Image Compression Ratio", Exact(DS), false),
    E::new(TagPattern::single(LUT_DESCRIPTOR), "LUTDescriptor", "LUT Descriptor", Xs, false),
    E::new(TagPattern::single(LUT_DATA), "LUTData", "LUT Data", Lt, false),
    E::new(TagPattern::single(VOILUT_SEQUENCE), "VOILUTSequence", "VOI LUT Sequence", Exact(SQ), false),
    E::new(TagPattern::single(REQUESTED_PROCEDURE_DESCRIPTION), "RequestedProcedureDescription", "Requested Procedure Description", Exact(LO), false),
    E::new(TagPattern::single(PERFORMED_PROCEDURE_STEP_START_DATE), "PerformedProcedureStepStartDate", "Performed Procedure Step Start Date", Exact(DA), false),
    E::new(TagPattern::single(PERFORMED_PROCEDURE_STEP_ID), "PerformedProcedureStepID", "Performed Procedure Step ID", Exact(SH), false),
    E::new(TagPattern::single(CONTENT_SEQUENCE), "ContentSequence", "Content Sequence", Exact(SQ), false),
    E::new(TagPattern::single(PHASE_DESCRIPTION), "PhaseDescription", "Phase Description", Exact(CS), false),
    E::new(TagPattern::single(NUMBER_OF_SLICES), "NumberOfSlices", "Number of Slices", Exact(US), false),
    E::new(TagPattern::from_notation("(1000,xxx0)"), "EscapeTriplet", "Escape Triplet", Exact(US), true),
    E::new(TagPattern::from_notation("(1000,xxx1)"), "RunLengthTriplet", "Run Length Triplet", Exact(US), true),
    E::new(TagPattern::from_notation("(1000,xxx2)"), "HuffmanTableSize", "Huffman Table Size", Exact(US), true),
    E::new(TagPattern::from_notation("(1000,xxx3)"), "HuffmanTableTriplet", "Huffman Table Triplet", Exact(US), true),
    E::new(TagPattern::from_notation("(1000,xxx4)"), "ShiftTableSize", "Shift Table Size", Exact(US), true),
    E::new(TagPattern::from_notation("(1000,xxx5)"), "ShiftTableTriplet", "Shift Table Triplet", Exact(US), true),
    E::new(TagPattern::from_notation("(1010,xxxx)"), "ZonalMap", "Zonal Map", Exact(US), true),
    E::new(TagPattern::single(RADIATION_MACHINE_SAD), "RadiationMachineSAD", "Radiation Machine SAD", Exact(DS), false),
    E::new(TagPattern::single(STRUCTURE_SET_ROI_SEQUENCE), "StructureSetROISequence", "Structure Set ROI Sequence", Exact(SQ), false),
    E::new(TagPattern::single(BEAM_SEQUENCE), "BeamSequence", "Beam Sequence", Exact(SQ), false),
    E::new(TagPattern::from_notation("(50xx,0005)"), "CurveDimensions", "Curve Dimensions", Exact(US), true),
    E::new(TagPattern::from_notation("(50xx,0010)"), "NumberOfPoints", "Number of Points", Exact(US), true),
    E::new(TagPattern::from_notation("(50xx,0020)"), "TypeOfData", "Type of Data", Exact(CS), true),
    E::new(TagPattern::from_notation("(50xx,0022)"), "CurveDescription", "Curve Description", Exact(LO), true),
    E::new(TagPattern::from_notation("(50xx,0030)"), "AxisUnits", "Axis Units", Exact(SH), true),
    E::new(TagPattern::from_notation("(50xx,0103)"), "DataValueRepresentation", "Data Value Representation", Exact(US), true),
    E::new(TagPattern::from_notation("(50xx,2600)"), "CurveReferencedOverlaySequence", "Curve Referenced Overlay Sequence", Exact(SQ), true),
    E::new(TagPattern::from_notation("(50xx,3000)"), "CurveData", "Curve Data", Ox, true),
    E::new(TagPattern::from_notation("(60xx,0010)"), "OverlayRows", "Overlay Rows", Exact(US), false),
    E::new(TagPattern::from_notation("(60xx,0011)"), "OverlayColumns", "Overlay Columns", Exact(US), false),
    E::new(TagPattern::from_notation("(60xx,0015)"), "NumberOfFramesInOverlay", "Number of Frames in Overlay", Exact(IS), false),
    E::new(TagPattern::from_notation("(60xx,0022)"), "OverlayDescription", "Overlay Description", Exact(LO), false),
    E::new(TagPattern::from_notation("(60xx,0040)"), "OverlayType", "Overlay Type", Exact(CS), false),
    E::new(TagPattern::from_notation("(60xx,0050)"), "OverlayOrigin", "Overlay Origin", Exact(SS), false),
    E::new(TagPattern::from_notation("(60xx,0100)"), "OverlayBitsAllocated", "Overlay Bits Allocated", Exact(US), false),
    E::new(TagPattern::from_notation("(60xx,0102)"), "OverlayBitPosition", "Overlay Bit Position", Exact(US), false),
    E::new(TagPattern::from_notation("(60xx,0110)"), "OverlayFormat", "Overlay Format", Exact(CS), true),
    E::new(TagPattern::from_notation("(60xx,0200)"), "OverlayLocation", "Overlay Location", Exact(US), true),
    E::new(TagPattern::from_notation("(60xx,3000)"), "OverlayData", "Overlay Data", Ox, false),
    E::new(TagPattern::single(EXTENDED_OFFSET_TABLE), "ExtendedOffsetTable", "Extended Offset Table", Exact(OV), false),
    E::new(TagPattern::single(EXTENDED_OFFSET_TABLE_LENGTHS), "ExtendedOffsetTableLengths", "Extended Offset Table Lengths", Exact(OV), false),
    E::new(TagPattern::single(FLOAT_PIXEL_DATA), "FloatPixelData", "Float Pixel Data", Exact(OF), false),
    E::new(TagPattern::single(DOUBLE_FLOAT_PIXEL_DATA), "DoubleFloatPixelData", "Double Float Pixel Data", Exact(OD), false),
    E::new(TagPattern::single(PIXEL_DATA), "PixelData", "Pixel Data", Px, false),
    E::new(TagPattern::single(COEFFICIENTS_SDVN), "CoefficientsSDVN", "Coefficients SDVN", Exact(OW), true),
    E::new(TagPattern::single(COEFFICIENTS_SDHN), "CoefficientsSDHN", "Coefficients SDHN", Exact(OW), true),
    E::new(TagPattern::single(COEFFICIENTS_SDDN), "CoefficientsSDDN", "Coefficients SDDN", Exact(OW), true),
    E::new(TagPattern::from_notation("(7Fxx,0010)"), "VariablePixelData", "Variable Pixel Data", Ox, true),
    E::new(TagPattern::from_notation("(7Fxx,0011)"), "VariableNextDataGroup", "Variable Next Data Group", Exact(US), true),
    E::new(TagPattern::from_notation("(7Fxx,0020)"), "VariableCoefficientsSDVN", "Variable Coefficients SDVN", Exact(OW), true),
    E::new(TagPattern::from_notation("(7Fxx,0030)"), "VariableCoefficientsSDHN", "Variable Coefficients SDHN", Exact(OW), true),
    E::new(TagPattern::from_notation("(7Fxx,0040)"), "VariableCoefficientsSDDN", "Variable Coefficients SDDN", Exact(OW), true),
    E::new(TagPattern::single(DIGITAL_SIGNATURES_SEQUENCE), "DigitalSignaturesSequence", "Digital Signatures Sequence", Exact(SQ), false),
    E::new(TagPattern::single(DATA_SET_TRAILING_PADDING), "DataSetTrailingPadding", "Data Set Trailing Padding", Exact(OB), false),
    E::new(TagPattern::single(ITEM), "Item", "Item", Undefined, false),
    E::new(TagPattern::single(ITEM_DELIMITATION_ITEM), "ItemDelimitationItem", "Item Delimitation Item", Undefined, false),
    E::new(TagPattern::single(SEQUENCE_DELIMITATION_ITEM), "SequenceDelimitationItem", "Sequence Delimitation Item", Undefined, false),
];

use VirtualVr::*;
use dicom_dictionary_core::header::VR::*;
