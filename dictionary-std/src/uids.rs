//! UID declarations and the standard UID tables.
//!
//! Every UID of the tables is exposed as a string constant
//! named after its keyword.
//! Constants of retired UIDs are marked as deprecated.
//!
//! Transfer syntaxes are always available.
//! The remaining UID types are only compiled into the tables
//! when their respective Cargo feature is enabled.

use dicom_dictionary_core::dictionary::UidDictionaryEntryRef;

/// Transfer Syntax: Implicit VR Little Endian: Default Transfer Syntax for DICOM
#[rustfmt::skip]
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Transfer Syntax: Explicit VR Little Endian
#[rustfmt::skip]
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Transfer Syntax: Encapsulated Uncompressed Explicit VR Little Endian
#[rustfmt::skip]
pub const ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.98";
/// Transfer Syntax: Deflated Explicit VR Little Endian
#[rustfmt::skip]
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// Transfer Syntax: Explicit VR Big Endian (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
/// Transfer Syntax: JPEG Baseline (Process 1): Default Transfer Syntax for Lossy JPEG 8 Bit Image Compression
#[rustfmt::skip]
pub const JPEG_BASELINE8_BIT: &str = "1.2.840.10008.1.2.4.50";
/// Transfer Syntax: JPEG Extended (Process 2 & 4): Default Transfer Syntax for Lossy JPEG 12 Bit Image Compression (Process 4 only)
#[rustfmt::skip]
pub const JPEG_EXTENDED12_BIT: &str = "1.2.840.10008.1.2.4.51";
/// Transfer Syntax: JPEG Extended (Process 3 & 5) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_EXTENDED35: &str = "1.2.840.10008.1.2.4.52";
/// Transfer Syntax: JPEG Spectral Selection, Non-Hierarchical (Process 6 & 8) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL68: &str = "1.2.840.10008.1.2.4.53";
/// Transfer Syntax: JPEG Spectral Selection, Non-Hierarchical (Process 7 & 9) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL79: &str = "1.2.840.10008.1.2.4.54";
/// Transfer Syntax: JPEG Full Progression, Non-Hierarchical (Process 10 & 12) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_FULL_PROGRESSION_NON_HIERARCHICAL1012: &str = "1.2.840.10008.1.2.4.55";
/// Transfer Syntax: JPEG Full Progression, Non-Hierarchical (Process 11 & 13) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_FULL_PROGRESSION_NON_HIERARCHICAL1113: &str = "1.2.840.10008.1.2.4.56";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical (Process 14)
#[rustfmt::skip]
pub const JPEG_LOSSLESS: &str = "1.2.840.10008.1.2.4.57";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical (Process 15) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_LOSSLESS_NON_HIERARCHICAL15: &str = "1.2.840.10008.1.2.4.58";
/// Transfer Syntax: JPEG Extended, Hierarchical (Process 16 & 18) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_EXTENDED_HIERARCHICAL1618: &str = "1.2.840.10008.1.2.4.59";
/// Transfer Syntax: JPEG Extended, Hierarchical (Process 17 & 19) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_EXTENDED_HIERARCHICAL1719: &str = "1.2.840.10008.1.2.4.60";
/// Transfer Syntax: JPEG Spectral Selection, Hierarchical (Process 20 & 22) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_SPECTRAL_SELECTION_HIERARCHICAL2022: &str = "1.2.840.10008.1.2.4.61";
/// Transfer Syntax: JPEG Spectral Selection, Hierarchical (Process 21 & 23) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_SPECTRAL_SELECTION_HIERARCHICAL2123: &str = "1.2.840.10008.1.2.4.62";
/// Transfer Syntax: JPEG Full Progression, Hierarchical (Process 24 & 26) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_FULL_PROGRESSION_HIERARCHICAL2426: &str = "1.2.840.10008.1.2.4.63";
/// Transfer Syntax: JPEG Full Progression, Hierarchical (Process 25 & 27) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_FULL_PROGRESSION_HIERARCHICAL2527: &str = "1.2.840.10008.1.2.4.64";
/// Transfer Syntax: JPEG Lossless, Hierarchical (Process 28) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_LOSSLESS_HIERARCHICAL28: &str = "1.2.840.10008.1.2.4.65";
/// Transfer Syntax: JPEG Lossless, Hierarchical (Process 29) (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const JPEG_LOSSLESS_HIERARCHICAL29: &str = "1.2.840.10008.1.2.4.66";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 [Selection Value 1]): Default Transfer Syntax for Lossless JPEG Image Compression
#[rustfmt::skip]
pub const JPEG_LOSSLESS_SV1: &str = "1.2.840.10008.1.2.4.70";
/// Transfer Syntax: JPEG-LS Lossless Image Compression
#[rustfmt::skip]
pub const JPEGLS_LOSSLESS: &str = "1.2.840.10008.1.2.4.80";
/// Transfer Syntax: JPEG-LS Lossy (Near-Lossless) Image Compression
#[rustfmt::skip]
pub const JPEGLS_NEAR_LOSSLESS: &str = "1.2.840.10008.1.2.4.81";
/// Transfer Syntax: JPEG 2000 Image Compression (Lossless Only)
#[rustfmt::skip]
pub const JPEG2000_LOSSLESS: &str = "1.2.840.10008.1.2.4.90";
/// Transfer Syntax: JPEG 2000 Image Compression
#[rustfmt::skip]
pub const JPEG2000: &str = "1.2.840.10008.1.2.4.91";
/// Transfer Syntax: JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)
#[rustfmt::skip]
pub const JPEG2000_MC_LOSSLESS: &str = "1.2.840.10008.1.2.4.92";
/// Transfer Syntax: JPEG 2000 Part 2 Multi-component Image Compression
#[rustfmt::skip]
pub const JPEG2000_MC: &str = "1.2.840.10008.1.2.4.93";
/// Transfer Syntax: JPIP Referenced
#[rustfmt::skip]
pub const JPIP_REFERENCED: &str = "1.2.840.10008.1.2.4.94";
/// Transfer Syntax: JPIP Referenced Deflate
#[rustfmt::skip]
pub const JPIP_REFERENCED_DEFLATE: &str = "1.2.840.10008.1.2.4.95";
/// Transfer Syntax: MPEG2 Main Profile / Main Level
#[rustfmt::skip]
pub const MPEG2_MPML: &str = "1.2.840.10008.1.2.4.100";
/// Transfer Syntax: Fragmentable MPEG2 Main Profile / Main Level
#[rustfmt::skip]
pub const MPEG2_MPMLF: &str = "1.2.840.10008.1.2.4.100.1";
/// Transfer Syntax: MPEG2 Main Profile / High Level
#[rustfmt::skip]
pub const MPEG2_MPHL: &str = "1.2.840.10008.1.2.4.101";
/// Transfer Syntax: Fragmentable MPEG2 Main Profile / High Level
#[rustfmt::skip]
pub const MPEG2_MPHLF: &str = "1.2.840.10008.1.2.4.101.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 High Profile / Level 4.1
#[rustfmt::skip]
pub const MPEG4_HP41: &str = "1.2.840.10008.1.2.4.102";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.1
#[rustfmt::skip]
pub const MPEG4_HP41_F: &str = "1.2.840.10008.1.2.4.102.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1
#[rustfmt::skip]
pub const MPEG4_HP41_BD: &str = "1.2.840.10008.1.2.4.103";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1
#[rustfmt::skip]
pub const MPEG4_HP41_BDF: &str = "1.2.840.10008.1.2.4.103.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video
#[rustfmt::skip]
pub const MPEG4_HP422_D: &str = "1.2.840.10008.1.2.4.104";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video
#[rustfmt::skip]
pub const MPEG4_HP422_DF: &str = "1.2.840.10008.1.2.4.104.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video
#[rustfmt::skip]
pub const MPEG4_HP423_D: &str = "1.2.840.10008.1.2.4.105";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video
#[rustfmt::skip]
pub const MPEG4_HP423_DF: &str = "1.2.840.10008.1.2.4.105.1";
/// Transfer Syntax: MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2
#[rustfmt::skip]
pub const MPEG4_HP42_STEREO: &str = "1.2.840.10008.1.2.4.106";
/// Transfer Syntax: Fragmentable MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2
#[rustfmt::skip]
pub const MPEG4_HP42_STEREOF: &str = "1.2.840.10008.1.2.4.106.1";
/// Transfer Syntax: HEVC/H.265 Main Profile / Level 5.1
#[rustfmt::skip]
pub const HEVCMP51: &str = "1.2.840.10008.1.2.4.107";
/// Transfer Syntax: HEVC/H.265 Main 10 Profile / Level 5.1
#[rustfmt::skip]
pub const HEVCM10_P51: &str = "1.2.840.10008.1.2.4.108";
/// Transfer Syntax: JPEG XL Lossless
#[rustfmt::skip]
pub const JPEGXL_LOSSLESS: &str = "1.2.840.10008.1.2.4.110";
/// Transfer Syntax: JPEG XL JPEG Recompression
#[rustfmt::skip]
pub const JPEGXLJPEG_RECOMPRESSION: &str = "1.2.840.10008.1.2.4.111";
/// Transfer Syntax: JPEG XL
#[rustfmt::skip]
pub const JPEGXL: &str = "1.2.840.10008.1.2.4.112";
/// Transfer Syntax: High-Throughput JPEG 2000 Image Compression (Lossless Only)
#[rustfmt::skip]
pub const HTJ2_K_LOSSLESS: &str = "1.2.840.10008.1.2.4.201";
/// Transfer Syntax: High-Throughput JPEG 2000 with RPCL Options Image Compression (Lossless Only)
#[rustfmt::skip]
pub const HTJ2_K_LOSSLESS_RPCL: &str = "1.2.840.10008.1.2.4.202";
/// Transfer Syntax: High-Throughput JPEG 2000 Image Compression
#[rustfmt::skip]
pub const HTJ2_K: &str = "1.2.840.10008.1.2.4.203";
/// Transfer Syntax: JPIP HTJ2K Referenced
#[rustfmt::skip]
pub const JPIPHTJ2_K_REFERENCED: &str = "1.2.840.10008.1.2.4.204";
/// Transfer Syntax: JPIP HTJ2K Referenced Deflate
#[rustfmt::skip]
pub const JPIPHTJ2_K_REFERENCED_DEFLATE: &str = "1.2.840.10008.1.2.4.205";
/// Transfer Syntax: RLE Lossless
#[rustfmt::skip]
pub const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";
/// Transfer Syntax: RFC 2557 MIME encapsulation
#[rustfmt::skip]
pub const RFC2557_MIME_ENCAPSULATION: &str = "1.2.840.10008.1.2.6.1";
/// Transfer Syntax: XML Encoding
#[rustfmt::skip]
pub const XML_ENCODING: &str = "1.2.840.10008.1.2.6.2";
/// Transfer Syntax: SMPTE ST 2110-20 Uncompressed Progressive Active Video
#[rustfmt::skip]
pub const SMPTEST211020_UNCOMPRESSED_PROGRESSIVE_ACTIVE_VIDEO: &str = "1.2.840.10008.1.2.7.1";
/// Transfer Syntax: SMPTE ST 2110-20 Uncompressed Interlaced Active Video
#[rustfmt::skip]
pub const SMPTEST211020_UNCOMPRESSED_INTERLACED_ACTIVE_VIDEO: &str = "1.2.840.10008.1.2.7.2";
/// Transfer Syntax: SMPTE ST 2110-30 PCM Digital Audio
#[rustfmt::skip]
pub const SMPTEST211030_PCM_DIGITAL_AUDIO: &str = "1.2.840.10008.1.2.7.3";
/// Transfer Syntax: Papyrus 3 Implicit VR Little Endian (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const PAPYRUS3_IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.20";
/// SOP Class: Verification SOP Class
#[rustfmt::skip]
pub const VERIFICATION: &str = "1.2.840.10008.1.1";
/// SOP Class: Media Storage Directory Storage
#[rustfmt::skip]
pub const MEDIA_STORAGE_DIRECTORY_STORAGE: &str = "1.2.840.10008.1.3.10";
/// SOP Class: Basic Study Content Notification SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const BASIC_STUDY_CONTENT_NOTIFICATION: &str = "1.2.840.10008.1.9";
/// SOP Class: Storage Commitment Push Model SOP Class
#[rustfmt::skip]
pub const STORAGE_COMMITMENT_PUSH_MODEL: &str = "1.2.840.10008.1.20.1";
/// SOP Class: Storage Commitment Pull Model SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const STORAGE_COMMITMENT_PULL_MODEL: &str = "1.2.840.10008.1.20.2";
/// SOP Class: Procedural Event Logging SOP Class
#[rustfmt::skip]
pub const PROCEDURAL_EVENT_LOGGING: &str = "1.2.840.10008.1.40";
/// SOP Class: Detached Patient Management SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const DETACHED_PATIENT_MANAGEMENT: &str = "1.2.840.10008.3.1.2.1.1";
/// SOP Class: Modality Performed Procedure Step SOP Class
#[rustfmt::skip]
pub const MODALITY_PERFORMED_PROCEDURE_STEP: &str = "1.2.840.10008.3.1.2.3.3";
/// SOP Class: Basic Film Session SOP Class
#[rustfmt::skip]
pub const BASIC_FILM_SESSION: &str = "1.2.840.10008.5.1.1.1";
/// SOP Class: Basic Film Box SOP Class
#[rustfmt::skip]
pub const BASIC_FILM_BOX: &str = "1.2.840.10008.5.1.1.2";
/// SOP Class: Basic Grayscale Image Box SOP Class
#[rustfmt::skip]
pub const BASIC_GRAYSCALE_IMAGE_BOX: &str = "1.2.840.10008.5.1.1.4";
/// SOP Class: Basic Color Image Box SOP Class
#[rustfmt::skip]
pub const BASIC_COLOR_IMAGE_BOX: &str = "1.2.840.10008.5.1.1.4.1";
/// SOP Class: Referenced Image Box SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const REFERENCED_IMAGE_BOX: &str = "1.2.840.10008.5.1.1.4.2";
/// SOP Class: Print Job SOP Class
#[rustfmt::skip]
pub const PRINT_JOB: &str = "1.2.840.10008.5.1.1.14";
/// SOP Class: Printer SOP Class
#[rustfmt::skip]
pub const PRINTER: &str = "1.2.840.10008.5.1.1.16";
/// SOP Class: Computed Radiography Image Storage
#[rustfmt::skip]
pub const COMPUTED_RADIOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.1";
/// SOP Class: Digital X-Ray Image Storage - For Presentation
#[rustfmt::skip]
pub const DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.1.1";
/// SOP Class: Digital X-Ray Image Storage - For Processing
#[rustfmt::skip]
pub const DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PROCESSING: &str = "1.2.840.10008.5.1.4.1.1.1.1.1";
/// SOP Class: Digital Mammography X-Ray Image Storage - For Presentation
#[rustfmt::skip]
pub const DIGITAL_MAMMOGRAPHY_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.1.2";
/// SOP Class: CT Image Storage
#[rustfmt::skip]
pub const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
/// SOP Class: Enhanced CT Image Storage
#[rustfmt::skip]
pub const ENHANCED_CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2.1";
/// SOP Class: Ultrasound Multi-frame Image Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const ULTRASOUND_MULTI_FRAME_IMAGE_STORAGE_RETIRED: &str = "1.2.840.10008.5.1.4.1.1.3";
/// SOP Class: Ultrasound Multi-frame Image Storage
#[rustfmt::skip]
pub const ULTRASOUND_MULTI_FRAME_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.3.1";
/// SOP Class: MR Image Storage
#[rustfmt::skip]
pub const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
/// SOP Class: Enhanced MR Image Storage
#[rustfmt::skip]
pub const ENHANCED_MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4.1";
/// SOP Class: Nuclear Medicine Image Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const NUCLEAR_MEDICINE_IMAGE_STORAGE_RETIRED: &str = "1.2.840.10008.5.1.4.1.1.5";
/// SOP Class: Ultrasound Image Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const ULTRASOUND_IMAGE_STORAGE_RETIRED: &str = "1.2.840.10008.5.1.4.1.1.6";
/// SOP Class: Ultrasound Image Storage
#[rustfmt::skip]
pub const ULTRASOUND_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.6.1";
/// SOP Class: Secondary Capture Image Storage
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7";
/// SOP Class: Multi-frame True Color Secondary Capture Image Storage
#[rustfmt::skip]
pub const MULTI_FRAME_TRUE_COLOR_SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7.4";
/// SOP Class: Standalone Curve Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const STANDALONE_CURVE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9";
/// SOP Class: 12-lead ECG Waveform Storage
#[rustfmt::skip]
pub const TWELVE_LEAD_ECG_WAVEFORM_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.9.1.1";
/// SOP Class: Grayscale Softcopy Presentation State Storage
#[rustfmt::skip]
pub const GRAYSCALE_SOFTCOPY_PRESENTATION_STATE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.11.1";
/// SOP Class: X-Ray Angiographic Image Storage
#[rustfmt::skip]
pub const X_RAY_ANGIOGRAPHIC_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.12.1";
/// SOP Class: X-Ray Radiofluoroscopic Image Storage
#[rustfmt::skip]
pub const X_RAY_RADIOFLUOROSCOPIC_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.12.2";
/// SOP Class: Nuclear Medicine Image Storage
#[rustfmt::skip]
pub const NUCLEAR_MEDICINE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.20";
/// SOP Class: Raw Data Storage
#[rustfmt::skip]
pub const RAW_DATA_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.66";
/// SOP Class: Segmentation Storage
#[rustfmt::skip]
pub const SEGMENTATION_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.66.4";
/// SOP Class: Basic Text SR Storage
#[rustfmt::skip]
pub const BASIC_TEXT_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.11";
/// SOP Class: Enhanced SR Storage
#[rustfmt::skip]
pub const ENHANCED_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.22";
/// SOP Class: Comprehensive SR Storage
#[rustfmt::skip]
pub const COMPREHENSIVE_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.33";
/// SOP Class: Key Object Selection Document Storage
#[rustfmt::skip]
pub const KEY_OBJECT_SELECTION_DOCUMENT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.59";
/// SOP Class: Encapsulated PDF Storage
#[rustfmt::skip]
pub const ENCAPSULATED_PDF_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.104.1";
/// SOP Class: Positron Emission Tomography Image Storage
#[rustfmt::skip]
pub const POSITRON_EMISSION_TOMOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.128";
/// SOP Class: Standalone PET Curve Storage (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const STANDALONE_PET_CURVE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.129";
/// SOP Class: RT Image Storage
#[rustfmt::skip]
pub const RT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.1";
/// SOP Class: RT Dose Storage
#[rustfmt::skip]
pub const RT_DOSE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.2";
/// SOP Class: RT Structure Set Storage
#[rustfmt::skip]
pub const RT_STRUCTURE_SET_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.3";
/// SOP Class: RT Beams Treatment Record Storage
#[rustfmt::skip]
pub const RT_BEAMS_TREATMENT_RECORD_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.4";
/// SOP Class: RT Plan Storage
#[rustfmt::skip]
pub const RT_PLAN_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.5";
/// SOP Class: RT Ion Plan Storage
#[rustfmt::skip]
pub const RT_ION_PLAN_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.8";
/// SOP Class: RT Ion Beams Treatment Record Storage
#[rustfmt::skip]
pub const RT_ION_BEAMS_TREATMENT_RECORD_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.9";
/// SOP Class: Patient Root Query/Retrieve Information Model - FIND
#[rustfmt::skip]
pub const PATIENT_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.1.2.1.1";
/// SOP Class: Patient Root Query/Retrieve Information Model - MOVE
#[rustfmt::skip]
pub const PATIENT_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_MOVE: &str = "1.2.840.10008.5.1.4.1.2.1.2";
/// SOP Class: Patient Root Query/Retrieve Information Model - GET
#[rustfmt::skip]
pub const PATIENT_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_GET: &str = "1.2.840.10008.5.1.4.1.2.1.3";
/// SOP Class: Study Root Query/Retrieve Information Model - FIND
#[rustfmt::skip]
pub const STUDY_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.1.2.2.1";
/// SOP Class: Study Root Query/Retrieve Information Model - MOVE
#[rustfmt::skip]
pub const STUDY_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_MOVE: &str = "1.2.840.10008.5.1.4.1.2.2.2";
/// SOP Class: Study Root Query/Retrieve Information Model - GET
#[rustfmt::skip]
pub const STUDY_ROOT_QUERY_RETRIEVE_INFORMATION_MODEL_GET: &str = "1.2.840.10008.5.1.4.1.2.2.3";
/// SOP Class: Patient/Study Only Query/Retrieve Information Model - FIND (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const PATIENT_STUDY_ONLY_QUERY_RETRIEVE_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.1.2.3.1";
/// SOP Class: Modality Worklist Information Model - FIND
#[rustfmt::skip]
pub const MODALITY_WORKLIST_INFORMATION_MODEL_FIND: &str = "1.2.840.10008.5.1.4.31";
/// Meta SOP Class: Detached Patient Management Meta SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const DETACHED_PATIENT_MANAGEMENT_META: &str = "1.2.840.10008.3.1.2.1.4";
/// Meta SOP Class: Detached Study Management Meta SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const DETACHED_STUDY_MANAGEMENT_META: &str = "1.2.840.10008.3.1.2.5.5";
/// Meta SOP Class: Basic Grayscale Print Management Meta SOP Class
#[rustfmt::skip]
pub const BASIC_GRAYSCALE_PRINT_MANAGEMENT_META: &str = "1.2.840.10008.5.1.1.9";
/// Meta SOP Class: Referenced Grayscale Print Management Meta SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const REFERENCED_GRAYSCALE_PRINT_MANAGEMENT_META: &str = "1.2.840.10008.5.1.1.9.1";
/// Meta SOP Class: Basic Color Print Management Meta SOP Class
#[rustfmt::skip]
pub const BASIC_COLOR_PRINT_MANAGEMENT_META: &str = "1.2.840.10008.5.1.1.18";
/// Meta SOP Class: General Purpose Worklist Management Meta SOP Class (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const GENERAL_PURPOSE_WORKLIST_MANAGEMENT_META: &str = "1.2.840.10008.5.1.4.32";
/// Well-known SOP Instance: Storage Commitment Push Model SOP Instance
#[rustfmt::skip]
pub const STORAGE_COMMITMENT_PUSH_MODEL_INSTANCE: &str = "1.2.840.10008.1.20.1.1";
/// Well-known SOP Instance: Storage Commitment Pull Model SOP Instance (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const STORAGE_COMMITMENT_PULL_MODEL_INSTANCE: &str = "1.2.840.10008.1.20.2.1";
/// Well-known SOP Instance: Procedural Event Logging SOP Instance
#[rustfmt::skip]
pub const PROCEDURAL_EVENT_LOGGING_INSTANCE: &str = "1.2.840.10008.1.40.1";
/// Well-known SOP Instance: Hot Iron Color Palette SOP Instance
#[rustfmt::skip]
pub const HOT_IRON_PALETTE: &str = "1.2.840.10008.1.5.1";
/// Well-known SOP Instance: PET Color Palette SOP Instance
#[rustfmt::skip]
pub const PET_PALETTE: &str = "1.2.840.10008.1.5.2";
/// Well-known SOP Instance: Printer SOP Instance
#[rustfmt::skip]
pub const PRINTER_INSTANCE: &str = "1.2.840.10008.5.1.1.17";
/// Well-known SOP Instance: Print Queue SOP Instance (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const PRINT_QUEUE_INSTANCE: &str = "1.2.840.10008.5.1.1.25";
/// Well-known SOP Instance: Display System SOP Instance
#[rustfmt::skip]
pub const DISPLAY_SYSTEM_INSTANCE: &str = "1.2.840.10008.5.1.1.40.1";
/// DICOM UIDs as a Coding Scheme: DICOM UID Registry
#[rustfmt::skip]
pub const DCMUID: &str = "1.2.840.10008.2.6.1";
/// Coding Scheme: DICOM Controlled Terminology
#[rustfmt::skip]
pub const DCM: &str = "1.2.840.10008.2.16.4";
/// Coding Scheme: Adult Mouse Anatomy Ontology
#[rustfmt::skip]
pub const MA: &str = "1.2.840.10008.2.16.5";
/// Coding Scheme: Uberon Ontology
#[rustfmt::skip]
pub const UBERON: &str = "1.2.840.10008.2.16.6";
/// Coding Scheme: Dublin Core
#[rustfmt::skip]
pub const DC: &str = "1.2.840.10008.2.16.10";
/// Coding Scheme: ICD-11
#[rustfmt::skip]
pub const I11: &str = "1.2.840.10008.2.16.16";
/// Application Context Name: DICOM Application Context Name
#[rustfmt::skip]
pub const DICOM_APPLICATION_CONTEXT: &str = "1.2.840.10008.3.1.1.1";
/// Service Class: Storage Service Class
#[rustfmt::skip]
pub const STORAGE: &str = "1.2.840.10008.4.2";
/// Service Class: Unified Worklist and Procedure Step Service Class - Trial (Retired)
#[deprecated(note = "Retired DICOM UID")]
#[rustfmt::skip]
pub const UNIFIED_WORKLIST_AND_PROCEDURE_STEP_TRIAL: &str = "1.2.840.10008.5.1.4.34.4";
/// Service Class: Unified Worklist and Procedure Step Service Class
#[rustfmt::skip]
pub const UNIFIED_WORKLIST_AND_PROCEDURE_STEP: &str = "1.2.840.10008.5.1.4.34.6";
/// Application Hosting Model: Native DICOM Model
#[rustfmt::skip]
pub const NATIVE_DICOM_MODEL: &str = "1.2.840.10008.7.1.1";
/// Application Hosting Model: Abstract Multi-Dimensional Image Model
#[rustfmt::skip]
pub const ABSTRACT_MULTI_DIMENSIONAL_IMAGE_MODEL: &str = "1.2.840.10008.7.1.2";
/// Mapping Resource: DICOM Content Mapping Resource
#[rustfmt::skip]
pub const DICOM_CONTENT_MAPPING_RESOURCE: &str = "1.2.840.10008.8.1.1";
/// LDAP OID: dicomDeviceName
#[rustfmt::skip]
pub const DICOM_DEVICE_NAME: &str = "1.2.840.10008.15.0.3.1";
/// LDAP OID: dicomDescription
#[rustfmt::skip]
pub const DICOM_DESCRIPTION: &str = "1.2.840.10008.15.0.3.2";
/// LDAP OID: dicomManufacturer
#[rustfmt::skip]
pub const DICOM_MANUFACTURER: &str = "1.2.840.10008.15.0.3.3";
/// LDAP OID: dicomAETitle
#[rustfmt::skip]
pub const DICOM_AE_TITLE: &str = "1.2.840.10008.15.0.3.7";
/// LDAP OID: dicomHostname
#[rustfmt::skip]
pub const DICOM_HOSTNAME: &str = "1.2.840.10008.15.0.3.12";
/// LDAP OID: dicomPort
#[rustfmt::skip]
pub const DICOM_PORT: &str = "1.2.840.10008.15.0.3.13";
/// LDAP OID: dicomSOPClass
#[rustfmt::skip]
pub const DICOM_SOP_CLASS: &str = "1.2.840.10008.15.0.3.14";
/// LDAP OID: dicomTransferRole
#[rustfmt::skip]
pub const DICOM_TRANSFER_ROLE: &str = "1.2.840.10008.15.0.3.15";
/// LDAP OID: dicomTransferSyntax
#[rustfmt::skip]
pub const DICOM_TRANSFER_SYNTAX: &str = "1.2.840.10008.15.0.3.16";
/// LDAP OID: dicomConfigurationRoot
#[rustfmt::skip]
pub const DICOM_CONFIGURATION_ROOT: &str = "1.2.840.10008.15.0.4.1";
/// LDAP OID: dicomDevicesRoot
#[rustfmt::skip]
pub const DICOM_DEVICES_ROOT: &str = "1.2.840.10008.15.0.4.2";
/// LDAP OID: dicomDevice
#[rustfmt::skip]
pub const DICOM_DEVICE: &str = "1.2.840.10008.15.0.4.4";
/// LDAP OID: dicomNetworkAE
#[rustfmt::skip]
pub const DICOM_NETWORK_AE: &str = "1.2.840.10008.15.0.4.5";
/// LDAP OID: dicomNetworkConnection
#[rustfmt::skip]
pub const DICOM_NETWORK_CONNECTION: &str = "1.2.840.10008.15.0.4.6";
/// LDAP OID: dicomTransferCapability
#[rustfmt::skip]
pub const DICOM_TRANSFER_CAPABILITY: &str = "1.2.840.10008.15.0.4.8";
/// Synchronization Frame of Reference: Universal Coordinated Time
#[rustfmt::skip]
pub const UTC: &str = "1.2.840.10008.15.1.1";

#[allow(unused_imports)]
use dicom_dictionary_core::dictionary::UidType::*;

type E = UidDictionaryEntryRef<'static>;

#[rustfmt::skip]
#[cfg(feature = "sop-class")]
pub(crate) const SOP_CLASSES: &[E] = &[
    E::new("1.2.840.10008.1.1", "Verification SOP Class", "Verification", SopClass, false),
    E::new("1.2.840.10008.1.3.10", "Media Storage Directory Storage", "MediaStorageDirectoryStorage", SopClass, false),
    E::new("1.2.840.10008.1.9", "Basic Study Content Notification SOP Class (Retired)", "BasicStudyContentNotification", SopClass, true),
    E::new("1.2.840.10008.1.20.1", "Storage Commitment Push Model SOP Class", "StorageCommitmentPushModel", SopClass, false),
    E::new("1.2.840.10008.1.20.2", "Storage Commitment Pull Model SOP Class (Retired)", "StorageCommitmentPullModel", SopClass, true),
    E::new("1.2.840.10008.1.40", "Procedural Event Logging SOP Class", "ProceduralEventLogging", SopClass, false),
    E::new("1.2.840.10008.3.1.2.1.1", "Detached Patient Management SOP Class (Retired)", "DetachedPatientManagement", SopClass, true),
    E::new("1.2.840.10008.3.1.2.3.3", "Modality Performed Procedure Step SOP Class", "ModalityPerformedProcedureStep", SopClass, false),
    E::new("1.2.840.10008.5.1.1.1", "Basic Film Session SOP Class", "BasicFilmSession", SopClass, false),
    E::new("1.2.840.10008.5.1.1.2", "Basic Film Box SOP Class", "BasicFilmBox", SopClass, false),
    E::new("1.2.840.10008.5.1.1.4", "Basic Grayscale Image Box SOP Class", "BasicGrayscaleImageBox", SopClass, false),
    E::new("1.2.840.10008.5.1.1.4.1", "Basic Color Image Box SOP Class", "BasicColorImageBox", SopClass, false),
    E::new("1.2.840.10008.5.1.1.4.2", "Referenced Image Box SOP Class (Retired)", "ReferencedImageBox", SopClass, true),
    E::new("1.2.840.10008.5.1.1.14", "Print Job SOP Class", "PrintJob", SopClass, false),
    E::new("1.2.840.10008.5.1.1.16", "Printer SOP Class", "Printer", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.1", "Computed Radiography Image Storage", "ComputedRadiographyImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.1.1", "Digital X-Ray Image Storage - For Presentation", "DigitalXRayImageStorageForPresentation", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.1.1.1", "Digital X-Ray Image Storage - For Processing", "DigitalXRayImageStorageForProcessing", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.1.2", "Digital Mammography X-Ray Image Storage - For Presentation", "DigitalMammographyXRayImageStorageForPresentation", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.2", "CT Image Storage", "CTImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.2.1", "Enhanced CT Image Storage", "EnhancedCTImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.3", "Ultrasound Multi-frame Image Storage (Retired)", "UltrasoundMultiFrameImageStorageRetired", SopClass, true),
    E::new("1.2.840.10008.5.1.4.1.1.3.1", "Ultrasound Multi-frame Image Storage", "UltrasoundMultiFrameImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.4", "MR Image Storage", "MRImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.4.1", "Enhanced MR Image Storage", "EnhancedMRImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.5", "Nuclear Medicine Image Storage (Retired)", "NuclearMedicineImageStorageRetired", SopClass, true),
    E::new("1.2.840.10008.5.1.4.1.1.6", "Ultrasound Image Storage (Retired)", "UltrasoundImageStorageRetired", SopClass, true),
    E::new("1.2.840.10008.5.1.4.1.1.6.1", "Ultrasound Image Storage", "UltrasoundImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.7", "Secondary Capture Image Storage", "SecondaryCaptureImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.7.4", "Multi-frame True Color Secondary Capture Image Storage", "MultiFrameTrueColorSecondaryCaptureImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.9", "Standalone Curve Storage (Retired)", "StandaloneCurveStorage", SopClass, true),
    E::new("1.2.840.10008.5.1.4.1.1.9.1.1", "12-lead ECG Waveform Storage", "TwelveLeadECGWaveformStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.11.1", "Grayscale Softcopy Presentation State Storage", "GrayscaleSoftcopyPresentationStateStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.12.1", "X-Ray Angiographic Image Storage", "XRayAngiographicImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.12.2", "X-Ray Radiofluoroscopic Image Storage", "XRayRadiofluoroscopicImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.20", "Nuclear Medicine Image Storage", "NuclearMedicineImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.66", "Raw Data Storage", "RawDataStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.66.4", "Segmentation Storage", "SegmentationStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.88.11", "Basic Text SR Storage", "BasicTextSRStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.88.22", "Enhanced SR Storage", "EnhancedSRStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.88.33", "Comprehensive SR Storage", "ComprehensiveSRStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.88.59", "Key Object Selection Document Storage", "KeyObjectSelectionDocumentStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.104.1", "Encapsulated PDF Storage", "EncapsulatedPDFStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.128", "Positron Emission Tomography Image Storage", "PositronEmissionTomographyImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.129", "Standalone PET Curve Storage (Retired)", "StandalonePETCurveStorage", SopClass, true),
    E::new("1.2.840.10008.5.1.4.1.1.481.1", "RT Image Storage", "RTImageStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.481.2", "RT Dose Storage", "RTDoseStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.481.3", "RT Structure Set Storage", "RTStructureSetStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.481.4", "RT Beams Treatment Record Storage", "RTBeamsTreatmentRecordStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.481.5", "RT Plan Storage", "RTPlanStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.481.8", "RT Ion Plan Storage", "RTIonPlanStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.1.481.9", "RT Ion Beams Treatment Record Storage", "RTIonBeamsTreatmentRecordStorage", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.2.1.1", "Patient Root Query/Retrieve Information Model - FIND", "PatientRootQueryRetrieveInformationModelFind", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.2.1.2", "Patient Root Query/Retrieve Information Model - MOVE", "PatientRootQueryRetrieveInformationModelMove", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.2.1.3", "Patient Root Query/Retrieve Information Model - GET", "PatientRootQueryRetrieveInformationModelGet", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.2.2.1", "Study Root Query/Retrieve Information Model - FIND", "StudyRootQueryRetrieveInformationModelFind", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.2.2.2", "Study Root Query/Retrieve Information Model - MOVE", "StudyRootQueryRetrieveInformationModelMove", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.2.2.3", "Study Root Query/Retrieve Information Model - GET", "StudyRootQueryRetrieveInformationModelGet", SopClass, false),
    E::new("1.2.840.10008.5.1.4.1.2.3.1", "Patient/Study Only Query/Retrieve Information Model - FIND (Retired)", "PatientStudyOnlyQueryRetrieveInformationModelFind", SopClass, true),
    E::new("1.2.840.10008.5.1.4.31", "Modality Worklist Information Model - FIND", "ModalityWorklistInformationModelFind", SopClass, false),
];

#[rustfmt::skip]
pub(crate) const TRANSFER_SYNTAXES: &[E] = &[
    E::transfer_syntax("1.2.840.10008.1.2", "Implicit VR Little Endian: Default Transfer Syntax for DICOM", "ImplicitVRLittleEndian", false, false),
    E::transfer_syntax("1.2.840.10008.1.2.1", "Explicit VR Little Endian", "ExplicitVRLittleEndian", false, false),
    E::transfer_syntax("1.2.840.10008.1.2.1.98", "Encapsulated Uncompressed Explicit VR Little Endian", "EncapsulatedUncompressedExplicitVRLittleEndian", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.1.99", "Deflated Explicit VR Little Endian", "DeflatedExplicitVRLittleEndian", false, false),
    E::transfer_syntax("1.2.840.10008.1.2.2", "Explicit VR Big Endian (Retired)", "ExplicitVRBigEndian", true, false),
    E::transfer_syntax("1.2.840.10008.1.2.4.50", "JPEG Baseline (Process 1): Default Transfer Syntax for Lossy JPEG 8 Bit Image Compression", "JPEGBaseline8Bit", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.51", "JPEG Extended (Process 2 & 4): Default Transfer Syntax for Lossy JPEG 12 Bit Image Compression (Process 4 only)", "JPEGExtended12Bit", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.52", "JPEG Extended (Process 3 & 5) (Retired)", "JPEGExtended35", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.53", "JPEG Spectral Selection, Non-Hierarchical (Process 6 & 8) (Retired)", "JPEGSpectralSelectionNonHierarchical68", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.54", "JPEG Spectral Selection, Non-Hierarchical (Process 7 & 9) (Retired)", "JPEGSpectralSelectionNonHierarchical79", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.55", "JPEG Full Progression, Non-Hierarchical (Process 10 & 12) (Retired)", "JPEGFullProgressionNonHierarchical1012", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.56", "JPEG Full Progression, Non-Hierarchical (Process 11 & 13) (Retired)", "JPEGFullProgressionNonHierarchical1113", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.57", "JPEG Lossless, Non-Hierarchical (Process 14)", "JPEGLossless", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.58", "JPEG Lossless, Non-Hierarchical (Process 15) (Retired)", "JPEGLosslessNonHierarchical15", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.59", "JPEG Extended, Hierarchical (Process 16 & 18) (Retired)", "JPEGExtendedHierarchical1618", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.60", "JPEG Extended, Hierarchical (Process 17 & 19) (Retired)", "JPEGExtendedHierarchical1719", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.61", "JPEG Spectral Selection, Hierarchical (Process 20 & 22) (Retired)", "JPEGSpectralSelectionHierarchical2022", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.62", "JPEG Spectral Selection, Hierarchical (Process 21 & 23) (Retired)", "JPEGSpectralSelectionHierarchical2123", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.63", "JPEG Full Progression, Hierarchical (Process 24 & 26) (Retired)", "JPEGFullProgressionHierarchical2426", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.64", "JPEG Full Progression, Hierarchical (Process 25 & 27) (Retired)", "JPEGFullProgressionHierarchical2527", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.65", "JPEG Lossless, Hierarchical (Process 28) (Retired)", "JPEGLosslessHierarchical28", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.66", "JPEG Lossless, Hierarchical (Process 29) (Retired)", "JPEGLosslessHierarchical29", true, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.70", "JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 [Selection Value 1]): Default Transfer Syntax for Lossless JPEG Image Compression", "JPEGLosslessSV1", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.80", "JPEG-LS Lossless Image Compression", "JPEGLSLossless", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.81", "JPEG-LS Lossy (Near-Lossless) Image Compression", "JPEGLSNearLossless", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.90", "JPEG 2000 Image Compression (Lossless Only)", "JPEG2000Lossless", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.91", "JPEG 2000 Image Compression", "JPEG2000", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.92", "JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)", "JPEG2000MCLossless", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.93", "JPEG 2000 Part 2 Multi-component Image Compression", "JPEG2000MC", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.94", "JPIP Referenced", "JPIPReferenced", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.95", "JPIP Referenced Deflate", "JPIPReferencedDeflate", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.100", "MPEG2 Main Profile / Main Level", "MPEG2MPML", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.100.1", "Fragmentable MPEG2 Main Profile / Main Level", "MPEG2MPMLF", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.101", "MPEG2 Main Profile / High Level", "MPEG2MPHL", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.101.1", "Fragmentable MPEG2 Main Profile / High Level", "MPEG2MPHLF", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.102", "MPEG-4 AVC/H.264 High Profile / Level 4.1", "MPEG4HP41", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.102.1", "Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.1", "MPEG4HP41F", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.103", "MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1", "MPEG4HP41BD", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.103.1", "Fragmentable MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1", "MPEG4HP41BDF", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.104", "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video", "MPEG4HP422D", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.104.1", "Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video", "MPEG4HP422DF", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.105", "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video", "MPEG4HP423D", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.105.1", "Fragmentable MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video", "MPEG4HP423DF", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.106", "MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2", "MPEG4HP42STEREO", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.106.1", "Fragmentable MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2", "MPEG4HP42STEREOF", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.107", "HEVC/H.265 Main Profile / Level 5.1", "HEVCMP51", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.108", "HEVC/H.265 Main 10 Profile / Level 5.1", "HEVCM10P51", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.110", "JPEG XL Lossless", "JPEGXLLossless", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.111", "JPEG XL JPEG Recompression", "JPEGXLJPEGRecompression", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.112", "JPEG XL", "JPEGXL", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.201", "High-Throughput JPEG 2000 Image Compression (Lossless Only)", "HTJ2KLossless", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.202", "High-Throughput JPEG 2000 with RPCL Options Image Compression (Lossless Only)", "HTJ2KLosslessRPCL", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.203", "High-Throughput JPEG 2000 Image Compression", "HTJ2K", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.204", "JPIP HTJ2K Referenced", "JPIPHTJ2KReferenced", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.4.205", "JPIP HTJ2K Referenced Deflate", "JPIPHTJ2KReferencedDeflate", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.5", "RLE Lossless", "RLELossless", false, true),
    E::transfer_syntax("1.2.840.10008.1.2.6.1", "RFC 2557 MIME encapsulation", "RFC2557MIMEEncapsulation", false, false),
    E::transfer_syntax("1.2.840.10008.1.2.6.2", "XML Encoding", "XMLEncoding", false, false),
    E::transfer_syntax("1.2.840.10008.1.2.7.1", "SMPTE ST 2110-20 Uncompressed Progressive Active Video", "SMPTEST211020UncompressedProgressiveActiveVideo", false, false),
    E::transfer_syntax("1.2.840.10008.1.2.7.2", "SMPTE ST 2110-20 Uncompressed Interlaced Active Video", "SMPTEST211020UncompressedInterlacedActiveVideo", false, false),
    E::transfer_syntax("1.2.840.10008.1.2.7.3", "SMPTE ST 2110-30 PCM Digital Audio", "SMPTEST211030PCMDigitalAudio", false, false),
    E::transfer_syntax("1.2.840.10008.1.20", "Papyrus 3 Implicit VR Little Endian (Retired)", "Papyrus3ImplicitVRLittleEndian", true, false),
];

#[rustfmt::skip]
#[cfg(feature = "meta-sop-class")]
pub(crate) const META_SOP_CLASSES: &[E] = &[
    E::new("1.2.840.10008.3.1.2.1.4", "Detached Patient Management Meta SOP Class (Retired)", "DetachedPatientManagementMeta", MetaSopClass, true),
    E::new("1.2.840.10008.3.1.2.5.5", "Detached Study Management Meta SOP Class (Retired)", "DetachedStudyManagementMeta", MetaSopClass, true),
    E::new("1.2.840.10008.5.1.1.9", "Basic Grayscale Print Management Meta SOP Class", "BasicGrayscalePrintManagementMeta", MetaSopClass, false),
    E::new("1.2.840.10008.5.1.1.9.1", "Referenced Grayscale Print Management Meta SOP Class (Retired)", "ReferencedGrayscalePrintManagementMeta", MetaSopClass, true),
    E::new("1.2.840.10008.5.1.1.18", "Basic Color Print Management Meta SOP Class", "BasicColorPrintManagementMeta", MetaSopClass, false),
    E::new("1.2.840.10008.5.1.4.32", "General Purpose Worklist Management Meta SOP Class (Retired)", "GeneralPurposeWorklistManagementMeta", MetaSopClass, true),
];

#[rustfmt::skip]
#[cfg(feature = "well-known-sop-instance")]
pub(crate) const WELL_KNOWN_SOP_INSTANCES: &[E] = &[
    E::new("1.2.840.10008.1.20.1.1", "Storage Commitment Push Model SOP Instance", "StorageCommitmentPushModelInstance", WellKnownSopInstance, false),
    E::new("1.2.840.10008.1.20.2.1", "Storage Commitment Pull Model SOP Instance (Retired)", "StorageCommitmentPullModelInstance", WellKnownSopInstance, true),
    E::new("1.2.840.10008.1.40.1", "Procedural Event Logging SOP Instance", "ProceduralEventLoggingInstance", WellKnownSopInstance, false),
    E::new("1.2.840.10008.1.5.1", "Hot Iron Color Palette SOP Instance", "HotIronPalette", WellKnownSopInstance, false),
    E::new("1.2.840.10008.1.5.2", "PET Color Palette SOP Instance", "PETPalette", WellKnownSopInstance, false),
    E::new("1.2.840.10008.5.1.1.17", "Printer SOP Instance", "PrinterInstance", WellKnownSopInstance, false),
    E::new("1.2.840.10008.5.1.1.25", "Print Queue SOP Instance (Retired)", "PrintQueueInstance", WellKnownSopInstance, true),
    E::new("1.2.840.10008.5.1.1.40.1", "Display System SOP Instance", "DisplaySystemInstance", WellKnownSopInstance, false),
];

#[rustfmt::skip]
#[cfg(feature = "dicom-uid-as-coding-scheme")]
pub(crate) const DICOM_UIDS_AS_CODING_SCHEMES: &[E] = &[
    E::new("1.2.840.10008.2.6.1", "DICOM UID Registry", "DCMUID", DicomUidsAsCodingScheme, false),
];

#[rustfmt::skip]
#[cfg(feature = "coding-scheme")]
pub(crate) const CODING_SCHEMES: &[E] = &[
    E::new("1.2.840.10008.2.16.4", "DICOM Controlled Terminology", "DCM", CodingScheme, false),
    E::new("1.2.840.10008.2.16.5", "Adult Mouse Anatomy Ontology", "MA", CodingScheme, false),
    E::new("1.2.840.10008.2.16.6", "Uberon Ontology", "UBERON", CodingScheme, false),
    E::new("1.2.840.10008.2.16.10", "Dublin Core", "DC", CodingScheme, false),
    E::new("1.2.840.10008.2.16.16", "ICD-11", "I11", CodingScheme, false),
];

#[rustfmt::skip]
#[cfg(feature = "application-context-name")]
pub(crate) const APPLICATION_CONTEXT_NAMES: &[E] = &[
    E::new("1.2.840.10008.3.1.1.1", "DICOM Application Context Name", "DICOMApplicationContext", ApplicationContextName, false),
];

#[rustfmt::skip]
#[cfg(feature = "service-class")]
pub(crate) const SERVICE_CLASSES: &[E] = &[
    E::new("1.2.840.10008.4.2", "Storage Service Class", "Storage", ServiceClass, false),
    E::new("1.2.840.10008.5.1.4.34.4", "Unified Worklist and Procedure Step Service Class - Trial (Retired)", "UnifiedWorklistAndProcedureStepTrial", ServiceClass, true),
    E::new("1.2.840.10008.5.1.4.34.6", "Unified Worklist and Procedure Step Service Class", "UnifiedWorklistAndProcedureStep", ServiceClass, false),
];

#[rustfmt::skip]
#[cfg(feature = "application-hosting-model")]
pub(crate) const APPLICATION_HOSTING_MODELS: &[E] = &[
    E::new("1.2.840.10008.7.1.1", "Native DICOM Model", "NativeDICOMModel", ApplicationHostingModel, false),
    E::new("1.2.840.10008.7.1.2", "Abstract Multi-Dimensional Image Model", "AbstractMultiDimensionalImageModel", ApplicationHostingModel, false),
];

#[rustfmt::skip]
#[cfg(feature = "mapping-resource")]
pub(crate) const MAPPING_RESOURCES: &[E] = &[
    E::new("1.2.840.10008.8.1.1", "DICOM Content Mapping Resource", "DICOMContentMappingResource", MappingResource, false),
];

#[rustfmt::skip]
#[cfg(feature = "ldap-oid")]
pub(crate) const LDAP_OIDS: &[E] = &[
    E::new("1.2.840.10008.15.0.3.1", "dicomDeviceName", "dicomDeviceName", LdapOid, false),
    E::new("1.2.840.10008.15.0.3.2", "dicomDescription", "dicomDescription", LdapOid, false),
    E::new("1.2.840.10008.15.0.3.3", "dicomManufacturer", "dicomManufacturer", LdapOid, false),
    E::new("1.2.840.10008.15.0.3.7", "dicomAETitle", "dicomAETitle", LdapOid, false),
    E::new("1.2.840.10008.15.0.3.12", "dicomHostname", "dicomHostname", LdapOid, false),
    E::new("1.2.840.10008.15.0.3.13", "dicomPort", "dicomPort", LdapOid, false),
    E::new("1.2.840.10008.15.0.3.14", "dicomSOPClass", "dicomSOPClass", LdapOid, false),
    E::new("1.2.840.10008.15.0.3.15", "dicomTransferRole", "dicomTransferRole", LdapOid, false),
    E::new("1.2.840.10008.15.0.3.16", "dicomTransferSyntax", "dicomTransferSyntax", LdapOid, false),
    E::new("1.2.840.10008.15.0.4.1", "dicomConfigurationRoot", "dicomConfigurationRoot", LdapOid, false),
    E::new("1.2.840.10008.15.0.4.2", "dicomDevicesRoot", "dicomDevicesRoot", LdapOid, false),
    E::new("1.2.840.10008.15.0.4.4", "dicomDevice", "dicomDevice", LdapOid, false),
    E::new("1.2.840.10008.15.0.4.5", "dicomNetworkAE", "dicomNetworkAE", LdapOid, false),
    E::new("1.2.840.10008.15.0.4.6", "dicomNetworkConnection", "dicomNetworkConnection", LdapOid, false),
    E::new("1.2.840.10008.15.0.4.8", "dicomTransferCapability", "dicomTransferCapability", LdapOid, false),
];

#[rustfmt::skip]
#[cfg(feature = "synchronization-frame-of-reference")]
pub(crate) const SYNCHRONIZATION_FRAME_OF_REFERENCES: &[E] = &[
    E::new("1.2.840.10008.15.1.1", "Universal Coordinated Time", "UTC", SynchronizationFrameOfReference, false),
];
